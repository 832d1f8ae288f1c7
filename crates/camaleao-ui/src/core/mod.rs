//! Core, DOM-free primitives shared by the feature slices.
pub mod auth;
pub mod error;
pub mod ports;
pub mod store;
