//! Feature slices: state, reducers, flows and (on wasm) views.

pub mod auth;
pub mod duplicate;
pub mod search;
pub mod token;
