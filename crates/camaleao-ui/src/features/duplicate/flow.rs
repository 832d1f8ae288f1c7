//! Async duplication flow.

use crate::core::ports::{Clock, DuplicationService, Notifier};
use crate::features::duplicate::actions::DuplicateAction;
use crate::features::duplicate::logic::{classify_duplicate, validate_submission};
use crate::i18n::TranslationBundle;
use camaleao_api_models::DuplicateRequest;

/// Validate the form, send the duplication request and report the tier.
///
/// Returns `true` when a request was sent.
pub async fn submit_duplicate<D, K, N>(
    ad_set_id: &str,
    quantity: &str,
    service: &D,
    clock: &K,
    notifier: &N,
    bundle: &TranslationBundle,
    dispatch: impl Fn(DuplicateAction),
) -> bool
where
    D: DuplicationService + ?Sized,
    K: Clock + ?Sized,
    N: Notifier + ?Sized,
{
    let submission = match validate_submission(ad_set_id, quantity) {
        Ok(submission) => submission,
        Err(err) => {
            notifier.notify(err.notice(bundle));
            return false;
        }
    };

    dispatch(DuplicateAction::Started);
    let request = DuplicateRequest {
        ad_set_id: submission.ad_set_id,
        quantity: submission.quantity,
        timestamp: clock.now_utc(),
    };
    let outcome = classify_duplicate(service.duplicate(&request).await);
    notifier.notify(outcome.notice(bundle));
    dispatch(DuplicateAction::Finished(outcome));
    true
}
