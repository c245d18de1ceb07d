//! Single-element controls.

pub(crate) mod badge;
pub(crate) mod button;
pub(crate) mod input;
pub(crate) mod textarea;

pub(crate) use badge::Badge;
pub(crate) use button::Button;
pub(crate) use input::Input;
pub(crate) use textarea::Textarea;
