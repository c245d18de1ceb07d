//! Core, DOM-free primitives and helpers for the Web UI.
pub mod snapshot;
pub mod store;
pub mod theme;
