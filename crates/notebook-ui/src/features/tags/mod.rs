//! Tag editing feature: modal view plus the intents it emits.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
