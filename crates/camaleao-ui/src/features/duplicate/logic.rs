//! Duplication form validation and response tiers.

use crate::core::error::{ServiceError, ValidationError};
use crate::features::search::logic::connection_notice;
use crate::i18n::TranslationBundle;
use crate::models::{Notice, NoticeKind};
use camaleao_api_models::DuplicateEnvelope;

/// Quick-pick quantities offered under the quantity field.
pub const PRESET_QUANTITIES: [u32; 4] = [49, 100, 200, 250];

/// HTTP-like status the webhook reports for a full success.
pub const STATUS_COMPLETE: u16 = 200;
/// Status the webhook reports when only part of the batch ran.
pub const STATUS_PARTIAL: u16 = 206;

/// Validated duplication request fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateSubmission {
    /// Trimmed ad-set id.
    pub ad_set_id: String,
    /// Number of copies requested.
    pub quantity: u32,
}

/// Parse the quantity field as a positive decimal integer.
///
/// Signs, decimals and exponent forms are rejected.
#[must_use]
pub fn parse_quantity(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<u32>().ok().filter(|quantity| *quantity > 0)
}

/// Check the form before anything is sent.
///
/// # Errors
///
/// Returns [`ValidationError::MissingAdSetId`] for a blank id and
/// [`ValidationError::InvalidQuantity`] for a blank or non-positive quantity.
pub fn validate_submission(
    ad_set_id: &str,
    quantity: &str,
) -> Result<DuplicateSubmission, ValidationError> {
    let ad_set_id = ad_set_id.trim();
    if ad_set_id.is_empty() {
        return Err(ValidationError::MissingAdSetId);
    }
    let quantity = parse_quantity(quantity).ok_or(ValidationError::InvalidQuantity)?;
    Ok(DuplicateSubmission {
        ad_set_id: ad_set_id.to_string(),
        quantity,
    })
}

/// Whether `preset` is highlighted for the current field text.
#[must_use]
pub fn is_active_preset(preset: u32, quantity: &str) -> bool {
    quantity == preset.to_string()
}

/// Classified duplication response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DuplicateOutcome {
    /// Every copy was created.
    Success {
        /// Server message.
        message: Option<String>,
    },
    /// Some copies were created.
    PartialSuccess {
        /// Copies created.
        succeeded: u64,
        /// Server message.
        message: Option<String>,
    },
    /// No copy was created.
    TotalFailure {
        /// Server message.
        message: Option<String>,
    },
    /// The status did not match a known tier.
    Unknown {
        /// Server message.
        message: Option<String>,
    },
    /// The request failed or the body could not be read.
    Unreachable,
}

impl DuplicateOutcome {
    /// Whether the form fields are cleared after this outcome.
    #[must_use]
    pub const fn clears_form(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::PartialSuccess { .. })
    }

    /// Notification describing the outcome.
    #[must_use]
    pub fn notice(&self, bundle: &TranslationBundle) -> Notice {
        let or_text = |message: Option<&str>, key: &str| {
            message.map_or_else(|| bundle.text(key, ""), str::to_string)
        };
        match self {
            Self::Success { message } => Notice::new(
                NoticeKind::Success,
                bundle.text("notice.duplicate_success_title", "Success!"),
                or_text(message.as_deref(), "notice.duplicate_success_body"),
            ),
            Self::PartialSuccess { succeeded, message } => {
                let succeeded = succeeded.to_string();
                Notice::new(
                    NoticeKind::Warning,
                    bundle.text("notice.duplicate_partial_title", "Partial success"),
                    message.clone().unwrap_or_else(|| {
                        bundle.text_with(
                            "notice.duplicate_partial_body",
                            "{success}",
                            &[("success", succeeded.as_str())],
                        )
                    }),
                )
            }
            Self::TotalFailure { message } => Notice::new(
                NoticeKind::Error,
                bundle.text("notice.duplicate_failed_title", "Critical failure"),
                or_text(message.as_deref(), "notice.duplicate_failed_body"),
            ),
            Self::Unknown { message } => Notice::new(
                NoticeKind::Info,
                bundle.text("notice.duplicate_unknown_title", "Attention"),
                or_text(message.as_deref(), "notice.duplicate_unknown_body"),
            ),
            Self::Unreachable => connection_notice(bundle),
        }
    }
}

/// Classify the duplication port result by the body's `status`.
#[must_use]
pub fn classify_duplicate(result: Result<DuplicateEnvelope, ServiceError>) -> DuplicateOutcome {
    let envelope = match result {
        Ok(envelope) => envelope,
        Err(ServiceError::Transport(_) | ServiceError::Malformed(_)) => {
            return DuplicateOutcome::Unreachable;
        }
        Err(ServiceError::Rejected(message)) => {
            return DuplicateOutcome::Unknown {
                message: non_blank(Some(message)),
            };
        }
        Err(ServiceError::NotFound) => return DuplicateOutcome::Unknown { message: None },
    };
    let message = non_blank(envelope.message.clone());
    match (envelope.status_code(), envelope.summary.as_ref()) {
        (Some(STATUS_COMPLETE), _) => DuplicateOutcome::Success { message },
        (Some(STATUS_PARTIAL), Some(summary)) if summary.success == 0 => {
            DuplicateOutcome::TotalFailure { message }
        }
        (Some(STATUS_PARTIAL), Some(summary)) => DuplicateOutcome::PartialSuccess {
            succeeded: summary.success,
            message,
        },
        _ => DuplicateOutcome::Unknown { message },
    }
}

fn non_blank(message: Option<String>) -> Option<String> {
    message.filter(|text| !text.trim().is_empty())
}
