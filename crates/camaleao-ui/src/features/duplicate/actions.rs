//! Duplication feature actions.

use crate::features::duplicate::logic::DuplicateOutcome;

/// Events applied to [`super::state::DuplicateState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DuplicateAction {
    /// The selected ad-set changed; overwrites the id field.
    Seed(String),
    /// The ad-set id field changed.
    AdSetInput(String),
    /// The quantity field changed.
    QuantityInput(String),
    /// A quick-pick was clicked.
    Preset(u32),
    /// A validated request is about to be sent.
    Started,
    /// The request resolved.
    Finished(DuplicateOutcome),
}
