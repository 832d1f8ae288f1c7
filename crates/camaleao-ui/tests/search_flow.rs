#![cfg(not(target_arch = "wasm32"))]

use camaleao_test_support::fixtures::{lookup_error, lookup_with_campaigns};
use camaleao_test_support::mocks::{FakeClipboard, FakeLookup, ManualClock, RecordingNotifier};
use camaleao_ui::core::error::ServiceError;
use camaleao_ui::core::ports::Clock;
use camaleao_ui::features::search::actions::SearchAction;
use camaleao_ui::features::search::flow::{copy_ad_set_id, submit_lookup};
use camaleao_ui::features::search::state::{COPY_FEEDBACK_MS, SearchState};
use camaleao_ui::i18n::{LocaleCode, TranslationBundle};
use camaleao_api_models::LookupEnvelope;
use camaleao_ui::models::NoticeKind;
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn harness() -> (Rc<RefCell<SearchState>>, impl Fn(SearchAction)) {
    let state = Rc::new(RefCell::new(SearchState::default()));
    let dispatch = {
        let state = Rc::clone(&state);
        move |action| state.borrow_mut().apply(action)
    };
    (state, dispatch)
}

#[tokio::test]
async fn lookup_sends_trimmed_account_and_expands_every_campaign() -> anyhow::Result<()> {
    let (state, dispatch) = harness();
    let seen_loading = Rc::new(Cell::new(false));
    let lookup = FakeLookup::scripted([Ok(lookup_with_campaigns(&["c-1", "c-2"]))]).with_in_flight({
        let state = Rc::clone(&state);
        let seen_loading = Rc::clone(&seen_loading);
        move || seen_loading.set(state.borrow().loading)
    });
    let notifier = RecordingNotifier::default();
    let bundle = TranslationBundle::new(LocaleCode::Pt);

    let sent = submit_lookup("  act_123  ", "tok-9", &lookup, &notifier, &bundle, dispatch).await;

    assert!(sent);
    let requests = lookup.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].account_id, "act_123");
    assert_eq!(requests[0].token, "tok-9");
    assert!(seen_loading.get(), "loading flag must be up while in flight");

    let state = state.borrow();
    assert!(!state.loading);
    assert!(state.shows_results());
    assert_eq!(state.campaigns.len(), 2);
    assert!(state.is_expanded("c-1"));
    assert!(state.is_expanded("c-2"));

    let notice = notifier.last().ok_or_else(|| anyhow::anyhow!("no notice"))?;
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.description, "2 campanha(s) encontrada(s).");
    Ok(())
}

#[tokio::test]
async fn blank_account_never_reaches_the_webhook() {
    let (state, dispatch) = harness();
    let lookup = FakeLookup::default();
    let notifier = RecordingNotifier::default();
    let bundle = TranslationBundle::new(LocaleCode::Pt);

    for raw in ["", "   ", "\t"] {
        assert!(!submit_lookup(raw, "", &lookup, &notifier, &bundle, &dispatch).await);
    }

    assert_eq!(lookup.calls(), 0);
    assert_eq!(notifier.kinds(), vec![NoticeKind::Error; 3]);
    assert_eq!(
        notifier.last().map(|notice| notice.title),
        Some("Campo obrigatório".to_string())
    );
    assert!(!state.borrow().has_searched);
}

#[tokio::test]
async fn error_message_replaces_previous_results() {
    let (state, dispatch) = harness();
    let lookup = FakeLookup::scripted([
        Ok(lookup_with_campaigns(&["c-1"])),
        Ok(lookup_error("Token inválido")),
    ]);
    let notifier = RecordingNotifier::default();
    let bundle = TranslationBundle::new(LocaleCode::Pt);

    submit_lookup("act_1", "", &lookup, &notifier, &bundle, &dispatch).await;
    assert_eq!(state.borrow().campaigns.len(), 1);

    submit_lookup("act_1", "", &lookup, &notifier, &bundle, &dispatch).await;

    let state = state.borrow();
    assert!(state.campaigns.is_empty());
    assert!(state.expanded.is_empty());
    assert!(state.shows_empty());
    let notice = notifier.last();
    assert_eq!(notice.as_ref().map(|n| n.kind), Some(NoticeKind::Error));
    assert_eq!(
        notice.map(|n| n.description),
        Some("Token inválido".to_string())
    );
}

#[tokio::test]
async fn transport_failure_reports_connection_error() {
    let (state, dispatch) = harness();
    let lookup = FakeLookup::scripted([Err(ServiceError::Transport("offline".into()))]);
    let notifier = RecordingNotifier::default();
    let bundle = TranslationBundle::new(LocaleCode::Pt);

    submit_lookup("act_1", "", &lookup, &notifier, &bundle, &dispatch).await;

    assert!(!state.borrow().loading);
    assert!(state.borrow().campaigns.is_empty());
    assert_eq!(
        notifier.last().map(|notice| notice.title),
        Some("Erro de conexão".to_string())
    );
}

#[tokio::test]
async fn copy_mark_lasts_two_seconds_and_latest_copy_wins() {
    let (state, dispatch) = harness();
    let clipboard = FakeClipboard::default();
    let clock = ManualClock::at(10_000);
    let notifier = RecordingNotifier::default();
    let bundle = TranslationBundle::new(LocaleCode::Pt);

    assert!(copy_ad_set_id("as-1", &clipboard, &clock, &notifier, &bundle, &dispatch).await);
    assert!(state.borrow().copy.is_copied("as-1", clock.now_ms()));

    clock.advance(1_500);
    assert!(copy_ad_set_id("as-2", &clipboard, &clock, &notifier, &bundle, &dispatch).await);
    assert!(!state.borrow().copy.is_copied("as-1", clock.now_ms()));
    assert!(state.borrow().copy.is_copied("as-2", clock.now_ms()));

    // The timer armed by the first copy fires; the second mark survives it.
    dispatch(SearchAction::CopyExpired {
        at_ms: 10_000 + COPY_FEEDBACK_MS,
    });
    assert_eq!(state.borrow().copy.copied_id(), Some("as-2"));

    clock.advance(COPY_FEEDBACK_MS);
    dispatch(SearchAction::CopyExpired {
        at_ms: clock.now_ms(),
    });
    assert_eq!(state.borrow().copy.copied_id(), None);

    assert_eq!(clipboard.writes(), vec!["as-1".to_string(), "as-2".to_string()]);
    assert_eq!(
        notifier.last().map(|notice| notice.description),
        Some("ID as-2 copiado para a área de transferência.".to_string())
    );
}

#[tokio::test]
async fn refused_clipboard_leaves_no_mark() {
    let (state, dispatch) = harness();
    let clipboard = FakeClipboard::refusing();
    let clock = ManualClock::at(0);
    let notifier = RecordingNotifier::default();
    let bundle = TranslationBundle::new(LocaleCode::Pt);

    assert!(!copy_ad_set_id("as-1", &clipboard, &clock, &notifier, &bundle, &dispatch).await);

    assert_eq!(state.borrow().copy.copied_id(), None);
    assert_eq!(notifier.kinds(), vec![NoticeKind::Error]);
}

#[tokio::test]
async fn entries_with_missing_fields_still_load() -> anyhow::Result<()> {
    let (state, dispatch) = harness();
    let envelope: LookupEnvelope = serde_json::from_value(json!({
        "data": [
            {
                "campaign_name": "A",
                "campaign_id": "c-1",
                "campaign_status": "ACTIVE",
                "campaign_objective": "OUTCOME_SALES",
                "ad_sets": [{"name": "BR", "id": "a-1"}]
            },
            {"campaign_name": "B", "campaign_id": "c-2", "campaign_objective": "X", "ad_sets": []},
            {"campaign_name": "sem id"}
        ],
        "total_campaigns": "2"
    }))?;
    let lookup = FakeLookup::scripted([Ok(envelope)]);
    let notifier = RecordingNotifier::default();
    let bundle = TranslationBundle::new(LocaleCode::Pt);

    submit_lookup("act_1", "", &lookup, &notifier, &bundle, &dispatch).await;

    let state = state.borrow();
    let ids: Vec<&str> = state.campaigns.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["c-1", "c-2"]);
    let expanded: Vec<&str> = state.expanded.iter().map(String::as_str).collect();
    assert_eq!(expanded, ["c-1", "c-2"]);
    assert_eq!(state.campaigns[0].ad_sets[0].status, "");
    let notice = notifier.last().ok_or_else(|| anyhow::anyhow!("no notice"))?;
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.description, "2 campanha(s) encontrada(s).");
    Ok(())
}

#[tokio::test]
async fn undecodable_body_reports_connection_error() {
    let (state, dispatch) = harness();
    let lookup = FakeLookup::scripted([Err(ServiceError::Malformed("<html>".into()))]);
    let notifier = RecordingNotifier::default();
    let bundle = TranslationBundle::new(LocaleCode::Pt);

    submit_lookup("act_1", "", &lookup, &notifier, &bundle, &dispatch).await;

    assert!(state.borrow().campaigns.is_empty());
    assert_eq!(
        notifier.last().map(|notice| notice.title),
        Some("Erro de conexão".to_string())
    );
}
