#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Wire DTOs for the Camaleao front-end.
//!
//! The campaign lookup and duplication webhooks are third-party endpoints with
//! a loose JSON contract, so the envelopes here keep the tolerant parts as
//! [`serde_json::Value`] and expose typed accessors instead of failing the
//! whole decode. The account service types follow the Supabase auth/PostgREST
//! payload shapes.
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value;

/// Body posted to the campaign lookup webhook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupRequest {
    /// Advertising account identifier, already trimmed.
    pub account_id: String,
    /// Per-user platform token; empty when none has been stored.
    pub token: String,
}

/// Envelope returned by the campaign lookup webhook.
///
/// `data` is kept untyped: a missing or non-list value is the malformed case
/// and must be told apart from an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LookupEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Campaign list payload when the lookup succeeded.
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Total campaign count as sent; see [`LookupEnvelope::reported_total`].
    pub total_campaigns: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Human-readable server message, usually present on errors.
    pub message: Option<String>,
}

impl LookupEnvelope {
    /// Decode the campaign list.
    ///
    /// Returns `None` only when `data` is absent or not a JSON array. Entries
    /// without a usable id are skipped; the rest are kept in webhook order.
    #[must_use]
    pub fn campaigns(&self) -> Option<Vec<CampaignDto>> {
        let items = self.data.as_ref()?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(|item| CampaignDto::deserialize(item).ok())
                .collect(),
        )
    }

    /// `total_campaigns` as a count; numeric strings and whole floats are
    /// accepted, anything else reads as absent.
    #[must_use]
    pub fn reported_total(&self) -> Option<u64> {
        match self.total_campaigns.as_ref()? {
            Value::Number(number) => number.as_u64().or_else(|| {
                number
                    .as_f64()
                    .filter(|value| *value >= 0.0 && value.fract().abs() < f64::EPSILON)
                    .map(whole_to_u64)
            }),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn whole_to_u64(value: f64) -> u64 {
    value as u64
}

/// Campaign entry as sent by the lookup webhook.
///
/// Only the id is required; display fields default to empty text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignDto {
    #[serde(default, deserialize_with = "loose_text")]
    /// Display name.
    pub campaign_name: String,
    #[serde(deserialize_with = "required_text")]
    /// Platform identifier.
    pub campaign_id: String,
    #[serde(default, deserialize_with = "loose_text")]
    /// Delivery status (`ACTIVE`, `PAUSED`, ...).
    pub campaign_status: String,
    #[serde(default, deserialize_with = "loose_text")]
    /// Campaign objective label.
    pub campaign_objective: String,
    #[serde(default, deserialize_with = "loose_ad_sets")]
    /// Ad-sets nested under the campaign, in webhook order.
    pub ad_sets: Vec<AdSetDto>,
}

/// Ad-set entry nested in a [`CampaignDto`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdSetDto {
    #[serde(default, deserialize_with = "loose_text")]
    /// Display name.
    pub name: String,
    #[serde(deserialize_with = "required_text")]
    /// Platform identifier.
    pub id: String,
    #[serde(default, deserialize_with = "loose_text")]
    /// Delivery status.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Daily budget; the platform sends either a string or a number.
    pub daily_budget: Option<BudgetValue>,
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn loose_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn required_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    scalar_text(Value::deserialize(deserializer)?)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| de::Error::custom("expected a non-empty id"))
}

fn loose_ad_sets<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<AdSetDto>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| AdSetDto::deserialize(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Budget amount as received from the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum BudgetValue {
    /// Amount encoded as a string (the usual platform encoding).
    Text(String),
    /// Amount encoded as a JSON number.
    Amount(serde_json::Number),
}

impl fmt::Display for BudgetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Amount(value) => write!(f, "{value}"),
        }
    }
}

/// Body posted to the duplication webhook.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DuplicateRequest {
    #[serde(rename = "conjunto_id")]
    /// Ad-set to duplicate.
    pub ad_set_id: String,
    #[serde(rename = "quantidade")]
    /// Number of copies requested.
    pub quantity: u32,
    #[serde(serialize_with = "serialize_iso_millis")]
    /// Submission instant.
    pub timestamp: DateTime<Utc>,
}

fn serialize_iso_millis<S: Serializer>(
    value: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Tiered result body returned by the duplication webhook.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DuplicateEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Outcome code embedded in the body (not the transport status).
    pub status: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Server message for the operator.
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Per-copy tally, present on partial outcomes.
    pub summary: Option<DuplicateSummary>,
}

impl DuplicateEnvelope {
    /// Outcome code as a number; accepts numeric strings as well.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self.status.as_ref()? {
            Value::Number(number) => number.as_u64().and_then(|code| u16::try_from(code).ok()),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Copy tally attached to a `206` duplication outcome.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DuplicateSummary {
    #[serde(default)]
    /// Copies created successfully.
    pub success: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Copies that failed, when reported.
    pub failed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Copies attempted, when reported.
    pub total: Option<u64>,
}

/// Email/password pair sent to the auth service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Authenticated user as returned by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUserDto {
    /// Stable user identifier (profile key).
    pub id: String,
    #[serde(default)]
    /// Email on record.
    pub email: Option<String>,
}

/// Session issued after a successful sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSessionDto {
    /// Bearer token for subsequent calls.
    pub access_token: String,
    /// Signed-in user.
    pub user: AuthUserDto,
}

/// Sign-up returns a session when auto-confirm is on, otherwise the bare user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SignUpResponse {
    /// Account created and signed in.
    Session(AuthSessionDto),
    /// Account created; confirmation pending.
    User(AuthUserDto),
}

/// Error body emitted by the auth service. Field names vary by endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Message field used by most endpoints.
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Message field used by newer endpoints.
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// OAuth-style description used by the token endpoint.
    pub error_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// OAuth-style error code.
    pub error: Option<String>,
}

impl AuthErrorBody {
    /// First human-readable reason present in the body.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        [
            &self.msg,
            &self.message,
            &self.error_description,
            &self.error,
        ]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .find(|reason| !reason.trim().is_empty())
    }
}

/// Token column of a profile row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileTokenRow {
    #[serde(default)]
    /// Stored platform token, if any.
    pub token: Option<String>,
}

/// Update payload for the profile token column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileTokenUpdate {
    /// New token value.
    pub token: String,
}

/// Error body returned by the profile store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreErrorBody {
    #[serde(default)]
    /// Provider error code (`PGRST116` means no matching row).
    pub code: Option<String>,
    #[serde(default)]
    /// Human-readable message.
    pub message: Option<String>,
}

/// Provider code signalling that a single-row read matched nothing.
pub const NO_ROWS_CODE: &str = "PGRST116";

impl StoreErrorBody {
    /// Whether the error is the "no matching row" outcome.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.code.as_deref() == Some(NO_ROWS_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn lookup_envelope_decodes_nested_campaigns() {
        let envelope: LookupEnvelope = serde_json::from_value(json!({
            "data": [{
                "campaign_name": "Black Friday",
                "campaign_id": "c-1",
                "campaign_status": "ACTIVE",
                "campaign_objective": "OUTCOME_SALES",
                "ad_sets": [
                    {"name": "BR 18-35", "id": "a-1", "status": "PAUSED", "daily_budget": "5000"},
                    {"name": "BR 35+", "id": "a-2", "status": "ACTIVE", "daily_budget": 7000}
                ]
            }],
            "total_campaigns": 1
        }))
        .unwrap();

        let campaigns = envelope.campaigns().unwrap();
        assert_eq!(campaigns.len(), 1);
        let ad_sets = &campaigns[0].ad_sets;
        assert_eq!(ad_sets[0].daily_budget.as_ref().unwrap().to_string(), "5000");
        assert_eq!(ad_sets[1].daily_budget.as_ref().unwrap().to_string(), "7000");
        assert_eq!(envelope.reported_total(), Some(1));
    }

    #[test]
    fn lookup_envelope_without_list_is_not_campaigns() {
        let missing: LookupEnvelope =
            serde_json::from_value(json!({"message": "token expired"})).unwrap();
        assert!(missing.campaigns().is_none());
        assert_eq!(missing.message.as_deref(), Some("token expired"));

        let object: LookupEnvelope = serde_json::from_value(json!({"data": {}})).unwrap();
        assert!(object.campaigns().is_none());

        let empty: LookupEnvelope = serde_json::from_value(json!({"data": []})).unwrap();
        assert_eq!(empty.campaigns(), Some(Vec::new()));
    }

    #[test]
    fn partial_entries_keep_the_list_well_formed() {
        let envelope: LookupEnvelope = serde_json::from_value(json!({
            "data": [
                {
                    "campaign_name": "A",
                    "campaign_id": "c-1",
                    "campaign_status": "ACTIVE",
                    "campaign_objective": "OUTCOME_SALES",
                    "ad_sets": [
                        {"name": "full", "id": "a-1", "status": "ACTIVE"},
                        {"id": 120210, "status": null},
                        {"name": "no id", "status": "PAUSED"}
                    ]
                },
                {"campaign_name": "B", "campaign_id": "c-2", "campaign_objective": "X", "ad_sets": []},
                {"campaign_name": "no id", "campaign_status": "ACTIVE"},
                "garbage"
            ]
        }))
        .unwrap();

        let campaigns = envelope.campaigns().unwrap();
        let ids: Vec<&str> = campaigns.iter().map(|c| c.campaign_id.as_str()).collect();
        assert_eq!(ids, ["c-1", "c-2"]);
        assert_eq!(campaigns[1].campaign_status, "");
        let ad_set_ids: Vec<&str> = campaigns[0].ad_sets.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ad_set_ids, ["a-1", "120210"]);
        assert_eq!(campaigns[0].ad_sets[1].name, "");
        assert_eq!(campaigns[0].ad_sets[1].status, "");
    }

    #[test]
    fn reported_total_tolerates_loose_encodings() {
        let total = |value: Value| {
            serde_json::from_value::<LookupEnvelope>(json!({"data": [], "total_campaigns": value}))
                .unwrap()
                .reported_total()
        };
        assert_eq!(total(json!(3)), Some(3));
        assert_eq!(total(json!("3")), Some(3));
        assert_eq!(total(json!(" 0 ")), Some(0));
        assert_eq!(total(json!(3.0)), Some(3));
        assert_eq!(total(json!(2.5)), None);
        assert_eq!(total(json!(-1)), None);
        assert_eq!(total(json!("many")), None);
        assert_eq!(total(Value::Null), None);
    }

    #[test]
    fn duplicate_request_uses_webhook_field_names() {
        let request = DuplicateRequest {
            ad_set_id: "120210000".into(),
            quantity: 49,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "conjunto_id": "120210000",
                "quantidade": 49,
                "timestamp": "2024-03-01T12:30:00.000Z"
            })
        );
    }

    #[test]
    fn duplicate_status_accepts_numbers_and_numeric_strings() {
        let numeric: DuplicateEnvelope = serde_json::from_value(json!({"status": 206})).unwrap();
        assert_eq!(numeric.status_code(), Some(206));
        let text: DuplicateEnvelope = serde_json::from_value(json!({"status": "200"})).unwrap();
        assert_eq!(text.status_code(), Some(200));
        let junk: DuplicateEnvelope = serde_json::from_value(json!({"status": true})).unwrap();
        assert_eq!(junk.status_code(), None);
    }

    #[test]
    fn sign_up_response_tells_session_from_user() {
        let session: SignUpResponse = serde_json::from_value(json!({
            "access_token": "jwt",
            "user": {"id": "u-1", "email": "ops@example.com"}
        }))
        .unwrap();
        assert!(matches!(session, SignUpResponse::Session(_)));

        let user: SignUpResponse =
            serde_json::from_value(json!({"id": "u-2", "email": "new@example.com"})).unwrap();
        assert!(matches!(user, SignUpResponse::User(_)));
    }

    #[test]
    fn auth_error_reason_prefers_first_populated_field() {
        let body = AuthErrorBody {
            msg: Some("  ".into()),
            error_description: Some("Invalid login credentials".into()),
            error: Some("invalid_grant".into()),
            ..AuthErrorBody::default()
        };
        assert_eq!(body.reason(), Some("Invalid login credentials"));
        assert_eq!(AuthErrorBody::default().reason(), None);
    }

    #[test]
    fn store_error_detects_missing_row() {
        let body: StoreErrorBody =
            serde_json::from_value(json!({"code": "PGRST116", "message": "0 rows"})).unwrap();
        assert!(body.is_not_found());
        assert!(!StoreErrorBody::default().is_not_found());
    }
}
