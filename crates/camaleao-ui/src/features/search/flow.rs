//! Async search flows over the side-effect ports.
//!
//! # Design
//! - Validation runs before anything is dispatched or sent.
//! - Every sent request is bracketed by `LookupStarted`/`LookupFinished`.
//! - State changes go through the caller's dispatch so the store stays the single owner.

use crate::core::ports::{Clipboard, Clock, LookupService, Notifier};
use crate::features::search::actions::SearchAction;
use crate::features::search::logic::{classify_lookup, validate_account_id};
use crate::i18n::TranslationBundle;
use crate::models::{Notice, NoticeKind};
use camaleao_api_models::LookupRequest;

/// Validate the account id, run the lookup and report the result.
///
/// Returns `true` when a request was sent.
pub async fn submit_lookup<L, N>(
    raw_account_id: &str,
    token: &str,
    lookup: &L,
    notifier: &N,
    bundle: &TranslationBundle,
    dispatch: impl Fn(SearchAction),
) -> bool
where
    L: LookupService + ?Sized,
    N: Notifier + ?Sized,
{
    let account_id = match validate_account_id(raw_account_id) {
        Ok(account_id) => account_id,
        Err(err) => {
            notifier.notify(err.notice(bundle));
            return false;
        }
    };

    dispatch(SearchAction::LookupStarted);
    let request = LookupRequest {
        account_id,
        token: token.to_string(),
    };
    let outcome = classify_lookup(lookup.lookup(&request).await);
    notifier.notify(outcome.notice(bundle));
    dispatch(SearchAction::LookupFinished(outcome));
    true
}

/// Copy an ad-set id and key the affordance to it.
///
/// Returns `true` when the clipboard accepted the text.
pub async fn copy_ad_set_id<C, K, N>(
    id: &str,
    clipboard: &C,
    clock: &K,
    notifier: &N,
    bundle: &TranslationBundle,
    dispatch: impl Fn(SearchAction),
) -> bool
where
    C: Clipboard + ?Sized,
    K: Clock + ?Sized,
    N: Notifier + ?Sized,
{
    match clipboard.write_text(id).await {
        Ok(()) => {
            dispatch(SearchAction::Copied {
                id: id.to_string(),
                at_ms: clock.now_ms(),
            });
            notifier.notify(Notice::new(
                NoticeKind::Success,
                bundle.text("notice.copied_title", "Copied"),
                bundle.text_with("notice.copied_body", "{id}", &[("id", id)]),
            ));
            true
        }
        Err(_) => {
            notifier.notify(Notice::new(
                NoticeKind::Error,
                bundle.text("notice.copy_error_title", "Copy failed"),
                bundle.text("notice.copy_error_body", ""),
            ));
            false
        }
    }
}
