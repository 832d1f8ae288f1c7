//! Token settings feature.

pub mod flow;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
