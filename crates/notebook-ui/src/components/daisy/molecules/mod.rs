//! Composite containers built from atoms.

pub(crate) mod card;
pub(crate) mod modal;

pub(crate) use card::Card;
pub(crate) use modal::Modal;
