//! Browser-side port implementations (HTTP, clipboard, clock, toasts).

pub(crate) mod account;
pub(crate) mod browser;
pub(crate) mod webhooks;
