//! Feature slices: each owns its actions, pure state/logic, and views.

pub mod editor;
pub mod notes;
pub mod tags;
