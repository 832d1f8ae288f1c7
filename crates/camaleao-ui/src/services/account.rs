//! Identity and profile client (GoTrue auth + PostgREST `profiles` table).

use crate::core::auth::{Session, SignUpOutcome};
use crate::core::error::ServiceError;
use crate::core::ports::{AuthGateway, TokenStore};
use async_trait::async_trait;
use camaleao_api_models::{
    AuthErrorBody, AuthSessionDto, Credentials, ProfileTokenRow, ProfileTokenUpdate,
    SignUpResponse, StoreErrorBody,
};
use gloo::console;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const NOT_ACCEPTABLE: u16 = 406;

#[derive(Clone, Debug)]
pub(crate) struct AccountClient {
    base_url: String,
    anon_key: String,
}

impl AccountClient {
    pub(crate) fn new(base_url: &str, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn profile_filter(&self, session: &Session) -> String {
        self.url(&format!(
            "/rest/v1/profiles?select=token&user_id=eq.{}",
            urlencoding::encode(&session.user_id)
        ))
    }

    fn authed(&self, request: Request, bearer: &str) -> Request {
        request
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {bearer}"))
    }

    async fn post_credentials(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> Result<Response, ServiceError> {
        self.authed(Request::post(&self.url(path)), &self.anon_key)
            .header("Content-Type", "application/json")
            .json(credentials)
            .map_err(|err| ServiceError::Malformed(err.to_string()))?
            .send()
            .await
            .map_err(transport)
    }
}

#[async_trait(?Send)]
impl AuthGateway for AccountClient {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, ServiceError> {
        let response = self
            .post_credentials("/auth/v1/token?grant_type=password", credentials)
            .await?;
        if !response.ok() {
            return Err(auth_failure(response).await);
        }
        let dto: AuthSessionDto = decode(response).await?;
        Ok(Session::from(dto))
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, ServiceError> {
        let response = self.post_credentials("/auth/v1/signup", credentials).await?;
        if !response.ok() {
            return Err(auth_failure(response).await);
        }
        Ok(match decode::<SignUpResponse>(response).await? {
            SignUpResponse::Session(dto) => SignUpOutcome::SignedIn(Session::from(dto)),
            SignUpResponse::User(_) => SignUpOutcome::ConfirmationPending,
        })
    }

    async fn sign_out(&self, session: &Session) -> Result<(), ServiceError> {
        let response = self
            .authed(
                Request::post(&self.url("/auth/v1/logout")),
                &session.access_token,
            )
            .send()
            .await
            .map_err(transport)?;
        if response.ok() {
            Ok(())
        } else {
            Err(auth_failure(response).await)
        }
    }
}

#[async_trait(?Send)]
impl TokenStore for AccountClient {
    async fn load_token(&self, session: &Session) -> Result<Option<String>, ServiceError> {
        let response = self
            .authed(
                Request::get(&self.profile_filter(session)),
                &session.access_token,
            )
            .header("Accept", SINGLE_OBJECT)
            .send()
            .await
            .map_err(transport)?;
        if response.ok() {
            let row: ProfileTokenRow = decode(response).await?;
            return Ok(row.token);
        }
        Err(store_failure(response).await)
    }

    async fn save_token(&self, session: &Session, token: &str) -> Result<(), ServiceError> {
        let url = self.url(&format!(
            "/rest/v1/profiles?user_id=eq.{}",
            urlencoding::encode(&session.user_id)
        ));
        let response = self
            .authed(Request::patch(&url), &session.access_token)
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .json(&ProfileTokenUpdate {
                token: token.to_string(),
            })
            .map_err(|err| ServiceError::Malformed(err.to_string()))?
            .send()
            .await
            .map_err(transport)?;
        if response.ok() {
            Ok(())
        } else {
            Err(store_failure(response).await)
        }
    }
}

fn transport(err: gloo_net::Error) -> ServiceError {
    console::error!("account request failed", err.to_string());
    ServiceError::Transport(err.to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ServiceError::Malformed(err.to_string()))
}

async fn auth_failure(response: Response) -> ServiceError {
    let body = response.json::<AuthErrorBody>().await.unwrap_or_default();
    ServiceError::Rejected(body.reason().unwrap_or_default().to_string())
}

async fn store_failure(response: Response) -> ServiceError {
    let status = response.status();
    let body = response.json::<StoreErrorBody>().await.unwrap_or_default();
    if status == NOT_ACCEPTABLE || body.is_not_found() {
        return ServiceError::NotFound;
    }
    ServiceError::Rejected(body.message.unwrap_or_default())
}
