//! Webhook payloads and sessions shaped like production traffic.

use camaleao_api_models::{DuplicateEnvelope, LookupEnvelope};
use camaleao_ui::core::auth::Session;
use serde_json::{Value, json};

/// Ad-set entry as the lookup webhook emits it.
#[must_use]
pub fn ad_set_json(id: &str, status: &str) -> Value {
    json!({
        "name": format!("Conjunto {id}"),
        "id": id,
        "status": status,
        "daily_budget": "5000"
    })
}

/// Campaign entry with the given ad-set ids.
#[must_use]
pub fn campaign_json(id: &str, ad_set_ids: &[&str]) -> Value {
    json!({
        "campaign_name": format!("Campanha {id}"),
        "campaign_id": id,
        "campaign_status": "ACTIVE",
        "campaign_objective": "OUTCOME_SALES",
        "ad_sets": ad_set_ids
            .iter()
            .map(|ad_set| ad_set_json(ad_set, "ACTIVE"))
            .collect::<Vec<_>>()
    })
}

/// Successful lookup listing one campaign (with one ad-set) per id.
#[must_use]
pub fn lookup_with_campaigns(campaign_ids: &[&str]) -> LookupEnvelope {
    let data: Vec<Value> = campaign_ids
        .iter()
        .map(|id| {
            let ad_set = format!("{id}-as");
            campaign_json(id, &[ad_set.as_str()])
        })
        .collect();
    LookupEnvelope {
        data: Some(Value::Array(data)),
        total_campaigns: Some(json!(campaign_ids.len())),
        message: None,
    }
}

/// Lookup error body carrying only a message.
#[must_use]
pub fn lookup_error(message: &str) -> LookupEnvelope {
    LookupEnvelope {
        data: None,
        total_campaigns: None,
        message: Some(message.to_string()),
    }
}

/// Duplication body decoded from raw JSON.
///
/// # Panics
///
/// Panics when `value` is not an object the envelope accepts.
#[must_use]
pub fn duplicate_body(value: Value) -> DuplicateEnvelope {
    serde_json::from_value(value).expect("duplicate fixture must decode")
}

/// Signed-in operator used across suites.
#[must_use]
pub fn operator_session() -> Session {
    Session {
        user_id: "0b6f3c1e-user".to_string(),
        email: "ops@camaleao.test".to_string(),
        access_token: "jwt-access".to_string(),
    }
}
