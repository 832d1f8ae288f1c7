//! Token load/save flows.

use crate::core::auth::Session;
use crate::core::error::{ServiceError, ValidationError};
use crate::core::ports::{Notifier, TokenStore};
use crate::features::token::state::TokenAction;
use crate::i18n::TranslationBundle;
use crate::models::{Notice, NoticeKind};

/// Result of reading the stored token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenLoad {
    /// A non-empty token is stored.
    Found(String),
    /// No row, or a row without a token.
    Missing,
    /// The store failed; the token stays empty.
    Failed(ServiceError),
}

impl TokenLoad {
    /// Token to forward to the controller, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Found(token) => Some(token),
            Self::Missing | Self::Failed(_) => None,
        }
    }
}

/// Read the signed-in user's token. Never notifies; failures are returned
/// so the caller can log them.
pub async fn load_token<S>(
    session: &Session,
    store: &S,
    dispatch: impl Fn(TokenAction),
) -> TokenLoad
where
    S: TokenStore + ?Sized,
{
    dispatch(TokenAction::LoadStarted);
    let load = match store.load_token(session).await {
        Ok(Some(token)) if !token.trim().is_empty() => TokenLoad::Found(token),
        Ok(_) | Err(ServiceError::NotFound) => TokenLoad::Missing,
        Err(err) => TokenLoad::Failed(err),
    };
    dispatch(TokenAction::Loaded(load.token().map(str::to_string)));
    load
}

/// Validate and persist the draft token.
///
/// Returns the stored (trimmed) token on success.
pub async fn save_token<S, N>(
    session: &Session,
    draft: &str,
    store: &S,
    notifier: &N,
    bundle: &TranslationBundle,
    dispatch: impl Fn(TokenAction),
) -> Option<String>
where
    S: TokenStore + ?Sized,
    N: Notifier + ?Sized,
{
    let token = draft.trim();
    if token.is_empty() {
        notifier.notify(ValidationError::MissingToken.notice(bundle));
        return None;
    }

    dispatch(TokenAction::SaveStarted);
    match store.save_token(session, token).await {
        Ok(()) => {
            dispatch(TokenAction::SaveFinished(Some(token.to_string())));
            notifier.notify(Notice::new(
                NoticeKind::Success,
                bundle.text("notice.token_saved_title", "Token saved!"),
                bundle.text("notice.token_saved_body", ""),
            ));
            Some(token.to_string())
        }
        Err(_) => {
            dispatch(TokenAction::SaveFinished(None));
            notifier.notify(Notice::new(
                NoticeKind::Error,
                bundle.text("notice.token_save_error_title", "Save failed"),
                bundle.text("notice.token_save_error_body", ""),
            ));
            None
        }
    }
}
