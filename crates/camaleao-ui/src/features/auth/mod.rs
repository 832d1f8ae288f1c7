//! Email/password authentication page.

pub mod flow;
#[cfg(target_arch = "wasm32")]
pub mod view;
