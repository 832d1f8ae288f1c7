//! HTTP client for the lookup and duplication webhooks.
//!
//! Bodies are decoded whatever the HTTP status: the webhooks report their
//! own outcome in the payload.

use crate::core::error::ServiceError;
use crate::core::ports::{DuplicationService, LookupService};
use async_trait::async_trait;
use camaleao_api_models::{DuplicateEnvelope, DuplicateRequest, LookupEnvelope, LookupRequest};
use gloo::console;
use gloo_net::http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Clone, Debug)]
pub(crate) struct WebhookClient {
    lookup_url: String,
    duplicate_url: String,
}

impl WebhookClient {
    pub(crate) fn new(lookup_url: impl Into<String>, duplicate_url: impl Into<String>) -> Self {
        Self {
            lookup_url: lookup_url.into(),
            duplicate_url: duplicate_url.into(),
        }
    }

    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, ServiceError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|err| ServiceError::Malformed(err.to_string()))?
            .send()
            .await
            .map_err(|err| {
                console::error!("webhook request failed", url, err.to_string());
                ServiceError::Transport(err.to_string())
            })?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| ServiceError::Transport(err.to_string()))?;
        serde_json::from_str(&text).map_err(|err| {
            console::warn!("webhook body not json", url, status, err.to_string());
            ServiceError::Malformed(err.to_string())
        })
    }
}

#[async_trait(?Send)]
impl LookupService for WebhookClient {
    async fn lookup(&self, request: &LookupRequest) -> Result<LookupEnvelope, ServiceError> {
        self.post_json(&self.lookup_url, request).await
    }
}

#[async_trait(?Send)]
impl DuplicationService for WebhookClient {
    async fn duplicate(
        &self,
        request: &DuplicateRequest,
    ) -> Result<DuplicateEnvelope, ServiceError> {
        self.post_json(&self.duplicate_url, request).await
    }
}
