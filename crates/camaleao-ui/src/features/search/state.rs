//! Search feature state.
//!
//! # Design
//! - Keep the account input as raw text; trimming happens on submit.
//! - Campaigns and the expansion set are replaced wholesale per lookup.
//! - The copy affordance stores its expiry instead of owning a timer.

use crate::features::search::actions::SearchAction;
use crate::features::search::logic::LookupOutcome;
use crate::models::Campaign;
use std::collections::BTreeSet;

/// How long the "copied" affordance stays on an ad-set, in milliseconds.
pub const COPY_FEEDBACK_MS: u64 = 2_000;

/// "Copied" marker keyed by ad-set id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    active: Option<CopiedMark>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct CopiedMark {
    id: String,
    expires_at_ms: u64,
}

impl CopyFeedback {
    /// Key the affordance to `id`, replacing any earlier mark.
    pub fn mark(&mut self, id: &str, now_ms: u64) {
        self.active = Some(CopiedMark {
            id: id.to_string(),
            expires_at_ms: now_ms.saturating_add(COPY_FEEDBACK_MS),
        });
    }

    /// Whether `id` shows the affordance at `now_ms`.
    #[must_use]
    pub fn is_copied(&self, id: &str, now_ms: u64) -> bool {
        self.active
            .as_ref()
            .is_some_and(|mark| mark.id == id && now_ms < mark.expires_at_ms)
    }

    /// Drop the mark once its interval has elapsed.
    pub fn expire(&mut self, now_ms: u64) {
        if self
            .active
            .as_ref()
            .is_some_and(|mark| now_ms >= mark.expires_at_ms)
        {
            self.active = None;
        }
    }

    /// Id currently carrying the mark, regardless of time.
    #[must_use]
    pub fn copied_id(&self) -> Option<&str> {
        self.active.as_ref().map(|mark| mark.id.as_str())
    }
}

/// Account search form plus the campaign tree it produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Raw account id input.
    pub account_id: String,
    /// A lookup is in flight; the trigger is disabled.
    pub loading: bool,
    /// At least one lookup has been sent since the view mounted.
    pub has_searched: bool,
    /// Campaigns from the last well-formed response.
    pub campaigns: Vec<Campaign>,
    /// Expanded campaign ids; always a subset of `campaigns`.
    pub expanded: BTreeSet<String>,
    /// Copy affordance.
    pub copy: CopyFeedback,
}

impl SearchState {
    /// Apply an action.
    pub fn apply(&mut self, action: SearchAction) {
        match action {
            SearchAction::AccountInput(value) => self.account_id = value,
            SearchAction::LookupStarted => {
                self.loading = true;
                self.has_searched = true;
            }
            SearchAction::LookupFinished(outcome) => {
                self.loading = false;
                self.apply_outcome(outcome);
            }
            SearchAction::ToggleCampaign(id) => self.toggle_expansion(&id),
            SearchAction::Copied { id, at_ms } => self.copy.mark(&id, at_ms),
            SearchAction::CopyExpired { at_ms } => self.copy.expire(at_ms),
        }
    }

    fn apply_outcome(&mut self, outcome: LookupOutcome) {
        match outcome {
            LookupOutcome::Loaded { campaigns, .. } => {
                self.expanded = campaigns.iter().map(|c| c.id.clone()).collect();
                self.campaigns = campaigns;
            }
            LookupOutcome::Malformed { .. } | LookupOutcome::Unreachable => {
                self.campaigns.clear();
                self.expanded.clear();
            }
        }
    }

    fn toggle_expansion(&mut self, id: &str) {
        if !self.campaigns.iter().any(|campaign| campaign.id == id) {
            return;
        }
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    /// Whether a campaign's ad-sets are shown.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Show the campaign list (a search ran and returned campaigns).
    #[must_use]
    pub fn shows_results(&self) -> bool {
        self.has_searched && !self.loading && !self.campaigns.is_empty()
    }

    /// Show the "nothing found" panel.
    #[must_use]
    pub fn shows_empty(&self) -> bool {
        self.has_searched && !self.loading && self.campaigns.is_empty()
    }
}
