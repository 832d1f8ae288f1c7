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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Camaleão console entry point.
//!
//! On wasm32 this mounts the Yew app. A native build cannot render the
//! console, so it reports the endpoints baked into this build instead and
//! fails when they would not pass the boot-time check.

#[cfg(target_arch = "wasm32")]
fn main() {
    camaleao_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    let mut stderr = std::io::stderr().lock();
    match native::report(&camaleao_ui::config::UiConfig::from_build_env(), &mut stderr) {
        Ok(true) => std::process::ExitCode::SUCCESS,
        Ok(false) | Err(_) => std::process::ExitCode::FAILURE,
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use camaleao_ui::config::UiConfig;
    use std::io::{self, Write};

    /// Describe the baked endpoints; `Ok(false)` when they fail validation.
    pub(super) fn report(config: &UiConfig, out: &mut impl Write) -> io::Result<bool> {
        writeln!(
            out,
            "camaleao-ui renders in the browser only; serve it with `trunk serve`."
        )?;
        writeln!(out, "  lookup webhook:    {}", config.lookup_url)?;
        writeln!(out, "  duplicate webhook: {}", config.duplicate_url)?;
        writeln!(out, "  account service:   {}", config.auth_url)?;
        if config.auth_anon_key.is_empty() {
            writeln!(out, "  CAMALEAO_AUTH_ANON_KEY was not set at build time")?;
        }
        match config.validate() {
            Ok(()) => Ok(true),
            Err(err) => {
                writeln!(out, "configuration rejected: {err}")?;
                Ok(false)
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::native::report;
    use camaleao_ui::config::UiConfig;

    fn config(lookup_url: &str) -> UiConfig {
        UiConfig {
            lookup_url: lookup_url.to_string(),
            duplicate_url: "https://hooks.example.com/duplicate".to_string(),
            auth_url: "http://localhost:54321".to_string(),
            auth_anon_key: String::new(),
        }
    }

    #[test]
    fn report_lists_endpoints_and_missing_key() -> std::io::Result<()> {
        let mut out = Vec::new();
        assert!(report(&config("https://hooks.example.com/lookup"), &mut out)?);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("https://hooks.example.com/lookup"));
        assert!(text.contains("CAMALEAO_AUTH_ANON_KEY"));
        Ok(())
    }

    #[test]
    fn report_flags_invalid_endpoint() -> std::io::Result<()> {
        let mut out = Vec::new();
        assert!(!report(&config("ftp://nope"), &mut out)?);
        assert!(String::from_utf8_lossy(&out).contains("configuration rejected"));
        Ok(())
    }
}
