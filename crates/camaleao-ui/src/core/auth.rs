//! Authentication primitives shared across the UI.
//!
//! # Design
//! - Keep session state as simple data so callers can store/clear it without side effects.
//! - Only pre-validate presence; the identity service owns every other rule.
//! - Translate the two provider messages operators hit most; pass others through.

use crate::core::error::{ServiceError, ValidationError};
use crate::i18n::TranslationBundle;
use camaleao_api_models::{AuthSessionDto, Credentials};
use serde::{Deserialize, Serialize};

/// Provider message for a wrong email/password pair.
pub const INVALID_CREDENTIALS_REASON: &str = "Invalid login credentials";
/// Provider message for a duplicate registration.
pub const ALREADY_REGISTERED_REASON: &str = "User already registered";

/// Which form the auth page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    /// Existing account.
    SignIn,
    /// New account.
    SignUp,
}

impl AuthMode {
    /// The other mode, for the toggle link.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

/// Signed-in operator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Profile key in the token store.
    pub user_id: String,
    /// Email shown in the navbar.
    pub email: String,
    /// Bearer token for the account service.
    pub access_token: String,
}

impl From<AuthSessionDto> for Session {
    fn from(dto: AuthSessionDto) -> Self {
        Self {
            user_id: dto.user.id,
            email: dto.user.email.unwrap_or_default(),
            access_token: dto.access_token,
        }
    }
}

/// Result of a successful registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The account is usable right away.
    SignedIn(Session),
    /// The provider wants the email confirmed first.
    ConfirmationPending,
}

/// Check both fields are present and build the request payload.
///
/// # Errors
///
/// Returns [`ValidationError::MissingCredentials`] when either field is blank.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, ValidationError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(Credentials {
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}

/// Operator-facing reason for a failed auth call.
#[must_use]
pub fn failure_reason(error: &ServiceError, bundle: &TranslationBundle) -> String {
    let generic = || bundle.text("notice.auth_generic", "Something went wrong.");
    match error {
        ServiceError::Rejected(reason) => match reason.trim() {
            INVALID_CREDENTIALS_REASON => {
                bundle.text("notice.auth_invalid_credentials", INVALID_CREDENTIALS_REASON)
            }
            ALREADY_REGISTERED_REASON => {
                bundle.text("notice.auth_already_registered", ALREADY_REGISTERED_REASON)
            }
            "" => generic(),
            other => other.to_string(),
        },
        ServiceError::Transport(_) | ServiceError::Malformed(_) | ServiceError::NotFound => {
            generic()
        }
    }
}
