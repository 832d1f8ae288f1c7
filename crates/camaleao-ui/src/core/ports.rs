//! Side-effect ports used by the feature flows.
//!
//! # Design
//! - Each port exposes the smallest surface its flow needs.
//! - Async ports are `?Send`: everything runs on the browser main thread.
//! - Browser implementations live in `services`; tests bring their own fakes.

use crate::core::auth::{Session, SignUpOutcome};
use crate::core::error::ServiceError;
use crate::models::Notice;
use async_trait::async_trait;
use camaleao_api_models::{
    Credentials, DuplicateEnvelope, DuplicateRequest, LookupEnvelope, LookupRequest,
};
use chrono::{DateTime, Utc};

/// Delivers transient notifications to the operator.
pub trait Notifier {
    /// Show a notification.
    fn notify(&self, notice: Notice);
}

/// Wall clock used for timestamps and the copy affordance.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;
    /// Current instant in UTC.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Write access to the system clipboard.
#[async_trait(?Send)]
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> Result<(), ServiceError>;
}

/// Campaign lookup webhook.
#[async_trait(?Send)]
pub trait LookupService {
    /// Fetch the campaign tree for an account.
    async fn lookup(&self, request: &LookupRequest) -> Result<LookupEnvelope, ServiceError>;
}

/// Ad-set duplication webhook.
#[async_trait(?Send)]
pub trait DuplicationService {
    /// Ask for copies of an ad-set.
    async fn duplicate(&self, request: &DuplicateRequest)
    -> Result<DuplicateEnvelope, ServiceError>;
}

/// Per-user token persistence.
#[async_trait(?Send)]
pub trait TokenStore {
    /// Read the stored token. A missing row is [`ServiceError::NotFound`].
    async fn load_token(&self, session: &Session) -> Result<Option<String>, ServiceError>;
    /// Write the token for the session's user.
    async fn save_token(&self, session: &Session, token: &str) -> Result<(), ServiceError>;
}

/// Email/password identity service.
#[async_trait(?Send)]
pub trait AuthGateway {
    /// Exchange credentials for a session.
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, ServiceError>;
    /// Register a new account.
    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, ServiceError>;
    /// Revoke the session server-side.
    async fn sign_out(&self, session: &Session) -> Result<(), ServiceError>;
}
