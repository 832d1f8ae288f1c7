//! Sign-in / sign-up flow.

use crate::core::auth::{AuthMode, Session, SignUpOutcome, failure_reason, validate_credentials};
use crate::core::ports::{AuthGateway, Notifier};
use crate::i18n::TranslationBundle;
use crate::models::{Notice, NoticeKind};

/// What the auth page does after a submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAttempt {
    /// A session is available; persist it and leave the page.
    SignedIn(Session),
    /// The account exists but must be confirmed; switch to sign-in.
    AwaitingConfirmation,
    /// Validation or the provider refused; stay on the form.
    Failed,
}

/// Validate the form and call the identity service for `mode`.
pub async fn submit_credentials<G, N>(
    mode: AuthMode,
    email: &str,
    password: &str,
    gateway: &G,
    notifier: &N,
    bundle: &TranslationBundle,
) -> AuthAttempt
where
    G: AuthGateway + ?Sized,
    N: Notifier + ?Sized,
{
    let credentials = match validate_credentials(email, password) {
        Ok(credentials) => credentials,
        Err(err) => {
            notifier.notify(err.notice(bundle));
            return AuthAttempt::Failed;
        }
    };

    let result = match mode {
        AuthMode::SignIn => gateway.sign_in(&credentials).await.map(AuthAttempt::SignedIn),
        AuthMode::SignUp => gateway.sign_up(&credentials).await.map(|outcome| {
            notifier.notify(Notice::new(
                NoticeKind::Success,
                bundle.text("notice.account_created_title", "Account created!"),
                bundle.text("notice.account_created_body", ""),
            ));
            match outcome {
                SignUpOutcome::SignedIn(session) => AuthAttempt::SignedIn(session),
                SignUpOutcome::ConfirmationPending => AuthAttempt::AwaitingConfirmation,
            }
        }),
    };

    result.unwrap_or_else(|err| {
        notifier.notify(Notice::new(
            NoticeKind::Error,
            bundle.text("notice.auth_error_title", "Error"),
            failure_reason(&err, bundle),
        ));
        AuthAttempt::Failed
    })
}
