//! Error types surfaced by ports and local validation.
//!
//! # Design
//! - Port failures are split by what the operator can do about them.
//! - Validation errors never reach the network; they map straight to notices.

use crate::i18n::TranslationBundle;
use crate::models::{Notice, NoticeKind};
use thiserror::Error;

/// Failure reported by an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request never completed (network, CORS, aborted fetch).
    #[error("request failed: {0}")]
    Transport(String),
    /// The service answered with a body that could not be decoded.
    #[error("unexpected response: {0}")]
    Malformed(String),
    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,
    /// The service refused the request and explained why.
    #[error("{0}")]
    Rejected(String),
}

/// Local form validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Account id was empty or whitespace.
    #[error("account id is required")]
    MissingAccountId,
    /// Ad-set id was empty or whitespace.
    #[error("ad-set id is required")]
    MissingAdSetId,
    /// Quantity was empty or not a positive integer.
    #[error("quantity must be a positive integer")]
    InvalidQuantity,
    /// Token was empty or whitespace.
    #[error("token is required")]
    MissingToken,
    /// Email or password was empty.
    #[error("email and password are required")]
    MissingCredentials,
}

impl ValidationError {
    /// Notification shown for the failure.
    #[must_use]
    pub fn notice(self, bundle: &TranslationBundle) -> Notice {
        let (title, description) = match self {
            Self::MissingAccountId => ("notice.required_title", "notice.account_required"),
            Self::MissingAdSetId => ("notice.required_title", "notice.ad_set_required"),
            Self::InvalidQuantity => ("notice.required_title", "notice.quantity_invalid"),
            Self::MissingToken => ("notice.token_empty_title", "notice.token_empty_body"),
            Self::MissingCredentials => (
                "notice.credentials_required_title",
                "notice.credentials_required_body",
            ),
        };
        Notice::new(
            NoticeKind::Error,
            bundle.text(title, "Required field"),
            bundle.text(description, "Please check the form."),
        )
    }
}
