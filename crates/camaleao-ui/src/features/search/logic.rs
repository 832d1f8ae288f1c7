//! Lookup validation and response classification.

use crate::core::error::{ServiceError, ValidationError};
use crate::i18n::TranslationBundle;
use crate::models::{Campaign, Notice, NoticeKind};
use camaleao_api_models::LookupEnvelope;

/// Classified result of a campaign lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupOutcome {
    /// `data` was a list of campaigns (possibly empty).
    Loaded {
        /// Campaigns in webhook order.
        campaigns: Vec<Campaign>,
        /// `total_campaigns` as reported by the webhook.
        reported_total: Option<u64>,
    },
    /// The webhook answered without a usable campaign list.
    Malformed {
        /// Server-provided explanation, when any.
        message: Option<String>,
    },
    /// The request never completed or the body was not JSON.
    Unreachable,
}

impl LookupOutcome {
    /// Notification describing the outcome.
    #[must_use]
    pub fn notice(&self, bundle: &TranslationBundle) -> Notice {
        match self {
            Self::Loaded { campaigns, .. } if campaigns.is_empty() => Notice::new(
                NoticeKind::Warning,
                bundle.text("notice.none_found_title", "No campaigns found"),
                bundle.text("notice.none_found_body", ""),
            ),
            Self::Loaded {
                campaigns,
                reported_total,
            } => {
                let count = reported_total.map_or(campaigns.len().to_string(), |n| n.to_string());
                Notice::new(
                    NoticeKind::Success,
                    bundle.text("notice.loaded_title", "Campaigns loaded"),
                    bundle.text_with("notice.loaded_body", "{count}", &[("count", count.as_str())]),
                )
            }
            Self::Malformed { message } => Notice::new(
                NoticeKind::Error,
                bundle.text("notice.lookup_error_title", "Failed to load campaigns"),
                message
                    .clone()
                    .unwrap_or_else(|| bundle.text("notice.lookup_error_body", "")),
            ),
            Self::Unreachable => connection_notice(bundle),
        }
    }
}

/// Trim the account id and reject blanks.
///
/// # Errors
///
/// Returns [`ValidationError::MissingAccountId`] for empty or whitespace input.
pub fn validate_account_id(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingAccountId);
    }
    Ok(trimmed.to_string())
}

/// Classify the lookup port result.
#[must_use]
pub fn classify_lookup(result: Result<LookupEnvelope, ServiceError>) -> LookupOutcome {
    match result {
        Ok(envelope) => match envelope.campaigns() {
            Some(campaigns) => LookupOutcome::Loaded {
                campaigns: campaigns.into_iter().map(Campaign::from).collect(),
                reported_total: envelope.reported_total(),
            },
            None => LookupOutcome::Malformed {
                message: envelope.message.filter(|text| !text.trim().is_empty()),
            },
        },
        Err(ServiceError::Transport(_) | ServiceError::Malformed(_)) => {
            LookupOutcome::Unreachable
        }
        Err(ServiceError::Rejected(message)) => LookupOutcome::Malformed {
            message: Some(message).filter(|text| !text.trim().is_empty()),
        },
        Err(ServiceError::NotFound) => LookupOutcome::Malformed { message: None },
    }
}

/// Generic "could not reach the server" notification.
#[must_use]
pub fn connection_notice(bundle: &TranslationBundle) -> Notice {
    Notice::new(
        NoticeKind::Error,
        bundle.text("notice.connection_title", "Connection error"),
        bundle.text("notice.connection_body", ""),
    )
}

/// Caption under a campaign name: ad-set count and objective.
#[must_use]
pub fn campaign_caption(campaign: &Campaign, bundle: &TranslationBundle) -> String {
    let count = campaign.ad_sets.len().to_string();
    bundle.text_with(
        "search.ad_sets_count",
        "{count} • {objective}",
        &[
            ("count", count.as_str()),
            ("objective", campaign.objective.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;
    use serde_json::json;

    fn envelope(value: serde_json::Value) -> LookupEnvelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn blank_account_ids_are_rejected() {
        assert_eq!(validate_account_id(""), Err(ValidationError::MissingAccountId));
        assert_eq!(
            validate_account_id(" \t "),
            Err(ValidationError::MissingAccountId)
        );
        assert_eq!(validate_account_id(" act_42 ").unwrap(), "act_42");
    }

    #[test]
    fn list_payload_is_loaded() {
        let outcome = classify_lookup(Ok(envelope(json!({
            "data": [{
                "campaign_name": "A",
                "campaign_id": "c-1",
                "campaign_status": "ACTIVE",
                "campaign_objective": "OUTCOME_SALES",
                "ad_sets": []
            }],
            "total_campaigns": 1
        }))));
        let LookupOutcome::Loaded {
            campaigns,
            reported_total,
        } = outcome
        else {
            panic!("expected loaded outcome");
        };
        assert_eq!(campaigns.len(), 1);
        assert_eq!(reported_total, Some(1));
    }

    #[test]
    fn missing_list_surfaces_server_message() {
        assert_eq!(
            classify_lookup(Ok(envelope(json!({"message": "Token inválido"})))),
            LookupOutcome::Malformed {
                message: Some("Token inválido".into())
            }
        );
        assert_eq!(
            classify_lookup(Ok(envelope(json!({"data": "nope"})))),
            LookupOutcome::Malformed { message: None }
        );
    }

    #[test]
    fn transport_and_undecodable_bodies_are_unreachable() {
        assert_eq!(
            classify_lookup(Err(ServiceError::Transport("offline".into()))),
            LookupOutcome::Unreachable
        );
        assert_eq!(
            classify_lookup(Err(ServiceError::Malformed("not json".into()))),
            LookupOutcome::Unreachable
        );
        assert_eq!(
            classify_lookup(Err(ServiceError::NotFound)),
            LookupOutcome::Malformed { message: None }
        );
    }

    #[test]
    fn string_total_is_used_and_bad_total_falls_back_to_length() {
        let counted = |total: serde_json::Value| {
            classify_lookup(Ok(envelope(json!({"data": [], "total_campaigns": total}))))
        };
        assert_eq!(
            counted(json!("7")),
            LookupOutcome::Loaded {
                campaigns: Vec::new(),
                reported_total: Some(7)
            }
        );
        assert_eq!(
            counted(json!({"n": 7})),
            LookupOutcome::Loaded {
                campaigns: Vec::new(),
                reported_total: None
            }
        );
    }

    #[test]
    fn notices_follow_outcome() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let empty = LookupOutcome::Loaded {
            campaigns: Vec::new(),
            reported_total: Some(0),
        };
        assert_eq!(empty.notice(&bundle).kind, NoticeKind::Warning);

        let campaign = Campaign {
            name: "A".into(),
            id: "c-1".into(),
            status: "ACTIVE".into(),
            objective: "OUTCOME_SALES".into(),
            ad_sets: Vec::new(),
        };
        let loaded = LookupOutcome::Loaded {
            campaigns: vec![campaign.clone(), campaign],
            reported_total: None,
        };
        let notice = loaded.notice(&bundle);
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.description, "2 campaign(s) found.");

        let malformed = LookupOutcome::Malformed { message: None };
        assert_eq!(
            malformed.notice(&bundle).description,
            "Unexpected response from the server."
        );
        assert_eq!(
            LookupOutcome::Unreachable.notice(&bundle).title,
            "Connection error"
        );
    }

    #[test]
    fn caption_lists_count_and_objective() {
        let bundle = TranslationBundle::new(LocaleCode::Pt);
        let campaign = Campaign {
            name: "A".into(),
            id: "c-1".into(),
            status: "ACTIVE".into(),
            objective: "OUTCOME_TRAFFIC".into(),
            ad_sets: Vec::new(),
        };
        assert_eq!(
            campaign_caption(&campaign, &bundle),
            "0 conjunto(s) • OUTCOME_TRAFFIC"
        );
    }
}
