//! Search feature actions.
//!
//! # Design
//! - Capture user intent and flow milestones separate from rendering.
//! - Actions are data only; reducers in `state` apply them.

use crate::features::search::logic::LookupOutcome;

/// Events applied to [`super::state::SearchState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchAction {
    /// The account id input changed.
    AccountInput(String),
    /// A validated lookup request is about to be sent.
    LookupStarted,
    /// The lookup request resolved.
    LookupFinished(LookupOutcome),
    /// Expand or collapse a campaign.
    ToggleCampaign(String),
    /// An ad-set id reached the clipboard.
    Copied {
        /// Copied ad-set id.
        id: String,
        /// Clock reading when the copy completed.
        at_ms: u64,
    },
    /// The copy affordance timer fired.
    CopyExpired {
        /// Clock reading when the timer fired.
        at_ms: u64,
    },
}
