//! Build-time endpoint configuration.
//!
//! # Design
//! - Endpoints are baked into the wasm bundle at build time via `option_env!`.
//! - Defaults point at the production webhooks so a plain build works.
//! - Validation runs once at boot; the shell renders the error instead of the app.

use thiserror::Error;

/// Default campaign lookup webhook.
pub const DEFAULT_LOOKUP_URL: &str = "https://editor.vexly.com.br/webhook/listar-estrutura";
/// Default duplication webhook.
pub const DEFAULT_DUPLICATE_URL: &str =
    "https://editor.vexly.com.br/webhook/4c7618c6-fee9-44c3-8cd4-ddc39fde9e54";
/// Default account service (local Supabase stack).
pub const DEFAULT_AUTH_URL: &str = "http://localhost:54321";

/// Structured errors emitted while validating [`UiConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Field did not hold an absolute http(s) URL.
    #[error("invalid value for '{field}': '{value}' is not an absolute http(s) URL")]
    InvalidUrl {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Endpoint configuration for the browser services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Campaign lookup webhook.
    pub lookup_url: String,
    /// Duplication webhook.
    pub duplicate_url: String,
    /// Base URL of the auth/profile service.
    pub auth_url: String,
    /// Public (anon) key for the auth/profile service.
    pub auth_anon_key: String,
}

impl UiConfig {
    /// Read the configuration captured at build time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            lookup_url: option_env!("CAMALEAO_LOOKUP_URL")
                .unwrap_or(DEFAULT_LOOKUP_URL)
                .to_string(),
            duplicate_url: option_env!("CAMALEAO_DUPLICATE_URL")
                .unwrap_or(DEFAULT_DUPLICATE_URL)
                .to_string(),
            auth_url: option_env!("CAMALEAO_AUTH_URL")
                .unwrap_or(DEFAULT_AUTH_URL)
                .trim_end_matches('/')
                .to_string(),
            auth_anon_key: option_env!("CAMALEAO_AUTH_ANON_KEY")
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Check every endpoint is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("lookup_url", &self.lookup_url)?;
        check_url("duplicate_url", &self.duplicate_url)?;
        check_url("auth_url", &self.auth_url)
    }
}

fn check_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(rest) if !rest.is_empty() && !rest.starts_with('/') => Ok(()),
        _ => Err(ConfigError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}
