//! Ad-set duplication feature.
//!
//! # Design
//! - The form is seeded by the controller and cleared only on success tiers.
//! - Quantity stays text in state; parsing happens on submit.

pub mod actions;
pub mod flow;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
