//! Account search feature wiring.
//!
//! # Design
//! - One slice owns the lookup form, the campaign tree and the copy affordance.
//! - Selecting an ad-set is reported upward; the controller switches views.

pub mod actions;
pub mod flow;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
