//! Note list feature wiring.
//!
//! # Design
//! - Filtering is pure and lives in `logic` so it tests without a DOM.
//! - The list component is prop-driven; the page adapts the store to it.
//! - Navigation goes through the router, never through the store.

pub mod actions;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
