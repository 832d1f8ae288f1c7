//! UI-facing view models shared by the feature slices.

use camaleao_api_models::{AdSetDto, CampaignDto};

/// Campaign row rendered in the search tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Campaign {
    /// Display name.
    pub name: String,
    /// Platform identifier; also the expansion key.
    pub id: String,
    /// Raw delivery status string.
    pub status: String,
    /// Objective label.
    pub objective: String,
    /// Ad-sets in webhook order.
    pub ad_sets: Vec<AdSet>,
}

impl From<CampaignDto> for Campaign {
    fn from(dto: CampaignDto) -> Self {
        Self {
            name: dto.campaign_name,
            id: dto.campaign_id,
            status: dto.campaign_status,
            objective: dto.campaign_objective,
            ad_sets: dto.ad_sets.into_iter().map(AdSet::from).collect(),
        }
    }
}

/// Ad-set row nested under a [`Campaign`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdSet {
    /// Display name.
    pub name: String,
    /// Platform identifier forwarded to the duplication form.
    pub id: String,
    /// Raw delivery status string.
    pub status: String,
    /// Daily budget in its textual form.
    pub daily_budget: Option<String>,
}

impl From<AdSetDto> for AdSet {
    fn from(dto: AdSetDto) -> Self {
        Self {
            name: dto.name,
            id: dto.id,
            status: dto.status,
            daily_budget: dto.daily_budget.map(|budget| budget.to_string()),
        }
    }
}

/// Colour tier for a delivery status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    /// `ACTIVE` (green).
    Positive,
    /// `PAUSED` (yellow).
    Caution,
    /// Anything else.
    Neutral,
}

impl StatusTone {
    /// Classify a status string, ignoring case.
    #[must_use]
    pub fn for_status(status: &str) -> Self {
        match status.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Self::Positive,
            "PAUSED" => Self::Caution,
            _ => Self::Neutral,
        }
    }

    /// CSS modifier class for the badge.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Positive => "badge-success",
            Self::Caution => "badge-warning",
            Self::Neutral => "badge-ghost",
        }
    }
}

/// Severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Informational message.
    Info,
    /// Operation succeeded.
    Success,
    /// Operation partly succeeded or needs attention.
    Warning,
    /// Operation failed.
    Error,
}

/// Transient notification with a short title and a description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Severity classification.
    pub kind: NoticeKind,
    /// Short headline.
    pub title: String,
    /// Longer explanation.
    pub description: String,
}

impl Notice {
    /// Build a notice from its parts.
    #[must_use]
    pub fn new(kind: NoticeKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Notification being displayed.
    pub notice: Notice,
}
