#![cfg(not(target_arch = "wasm32"))]

use camaleao_test_support::fixtures::operator_session;
use camaleao_test_support::mocks::{FakeAuth, RecordingNotifier};
use camaleao_ui::core::auth::{
    ALREADY_REGISTERED_REASON, AuthMode, INVALID_CREDENTIALS_REASON, SignUpOutcome,
};
use camaleao_ui::core::error::ServiceError;
use camaleao_ui::features::auth::flow::{AuthAttempt, submit_credentials};
use camaleao_ui::i18n::{LocaleCode, TranslationBundle};
use camaleao_ui::models::NoticeKind;

fn rejecting(reason: &str) -> FakeAuth {
    FakeAuth::new(
        Err(ServiceError::Rejected(reason.to_string())),
        Err(ServiceError::Rejected(reason.to_string())),
    )
}

#[tokio::test]
async fn blank_fields_make_no_calls() {
    let auth = rejecting("unused");
    let notifier = RecordingNotifier::default();
    let bundle = TranslationBundle::new(LocaleCode::Pt);

    for (email, password) in [("", "secret"), ("ops@camaleao.test", ""), ("   ", "secret")] {
        let attempt =
            submit_credentials(AuthMode::SignIn, email, password, &auth, &notifier, &bundle).await;
        assert_eq!(attempt, AuthAttempt::Failed);
    }

    assert!(auth.calls().is_empty());
    assert_eq!(notifier.kinds(), vec![NoticeKind::Error; 3]);
}

#[tokio::test]
async fn sign_in_returns_session_without_notice() {
    let auth = FakeAuth::new(
        Ok(operator_session()),
        Err(ServiceError::Transport("unused".into())),
    );
    let notifier = RecordingNotifier::default();
    let bundle = TranslationBundle::new(LocaleCode::Pt);

    let attempt = submit_credentials(
        AuthMode::SignIn,
        " ops@camaleao.test ",
        " pass word ",
        &auth,
        &notifier,
        &bundle,
    )
    .await;

    assert_eq!(attempt, AuthAttempt::SignedIn(operator_session()));
    let calls = auth.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].email, "ops@camaleao.test");
    assert_eq!(calls[0].password, " pass word ");
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn known_provider_messages_are_translated() {
    let bundle = TranslationBundle::new(LocaleCode::Pt);
    let cases = [
        (INVALID_CREDENTIALS_REASON, "Email ou senha incorretos."),
        (ALREADY_REGISTERED_REASON, "Este email já está cadastrado."),
    ];

    for (reason, expected) in cases {
        let auth = rejecting(reason);
        let notifier = RecordingNotifier::default();
        let attempt =
            submit_credentials(AuthMode::SignUp, "a@b.c", "pw", &auth, &notifier, &bundle).await;
        assert_eq!(attempt, AuthAttempt::Failed);
        let notice = notifier.last();
        assert_eq!(notice.as_ref().map(|n| n.kind), Some(NoticeKind::Error));
        assert_eq!(notice.map(|n| n.description), Some(expected.to_string()));
    }
}

#[tokio::test]
async fn unknown_reasons_pass_through_and_transport_is_generic() {
    let bundle = TranslationBundle::new(LocaleCode::Pt);

    let auth = rejecting("Password should be at least 6 characters");
    let notifier = RecordingNotifier::default();
    submit_credentials(AuthMode::SignUp, "a@b.c", "pw", &auth, &notifier, &bundle).await;
    assert_eq!(
        notifier.last().map(|notice| notice.description),
        Some("Password should be at least 6 characters".to_string())
    );

    let auth = FakeAuth::new(
        Err(ServiceError::Transport("offline".into())),
        Err(ServiceError::Transport("offline".into())),
    );
    let notifier = RecordingNotifier::default();
    submit_credentials(AuthMode::SignIn, "a@b.c", "pw", &auth, &notifier, &bundle).await;
    assert_eq!(
        notifier.last().map(|notice| notice.description),
        Some("Ocorreu um erro. Tente novamente.".to_string())
    );
}

#[tokio::test]
async fn sign_up_announces_account_and_signs_in() {
    let auth = FakeAuth::new(
        Err(ServiceError::Transport("unused".into())),
        Ok(SignUpOutcome::SignedIn(operator_session())),
    );
    let notifier = RecordingNotifier::default();
    let bundle = TranslationBundle::new(LocaleCode::Pt);

    let attempt =
        submit_credentials(AuthMode::SignUp, "ops@camaleao.test", "pw", &auth, &notifier, &bundle)
            .await;

    assert_eq!(attempt, AuthAttempt::SignedIn(operator_session()));
    assert_eq!(
        notifier.last().map(|notice| notice.title),
        Some("Conta criada!".to_string())
    );
}

#[tokio::test]
async fn sign_up_awaiting_confirmation_stays_signed_out() {
    let auth = FakeAuth::new(
        Err(ServiceError::Transport("unused".into())),
        Ok(SignUpOutcome::ConfirmationPending),
    );
    let notifier = RecordingNotifier::default();
    let bundle = TranslationBundle::new(LocaleCode::En);

    let attempt =
        submit_credentials(AuthMode::SignUp, "ops@camaleao.test", "pw", &auth, &notifier, &bundle)
            .await;

    assert_eq!(attempt, AuthAttempt::AwaitingConfirmation);
    assert_eq!(notifier.kinds(), vec![NoticeKind::Success]);
}
