#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Camaleão web console.
//!
//! Operators look up an ad account's campaigns, pick an ad-set and ask the
//! duplication webhook for copies of it. The DOM-free parts (`core`,
//! `features::*::{state, logic, actions, flow}`, `models`, `i18n`, `config`)
//! build and test natively; the Yew shell, components and browser services
//! only build for `wasm32`.

pub mod config;
pub mod core;
pub mod features;
pub mod i18n;
pub mod models;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::i18n::{LocaleCode, TranslationBundle};
    use crate::models::StatusTone;

    #[test]
    fn default_bundle_speaks_portuguese() {
        let bundle = TranslationBundle::new(LocaleCode::Pt);
        assert_eq!(bundle.text("search.submit", "Search"), "Buscar");
    }

    #[test]
    fn status_tones_cover_known_statuses() {
        assert_eq!(StatusTone::for_status("active"), StatusTone::Positive);
        assert_eq!(StatusTone::for_status("Paused"), StatusTone::Caution);
        assert_eq!(StatusTone::for_status("ARCHIVED"), StatusTone::Neutral);
    }
}
