use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// Kinds of invocation that run the reminder check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
pub enum TriggerType {
    CRON,
    UPDATE,
}

impl TriggerType {
    pub fn parse(val: &str) -> Option<Self> {
        match val {
            "CRON" => Some(Self::CRON),
            "UPDATE" => Some(Self::UPDATE),
            _ => None,
        }
    }
}

/// request body schema for the push notification trigger
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TriggerReqBody {
    /// `CRON` or `UPDATE` run the reminder check, anything else is ignored
    #[serde(rename = "type", default)]
    #[schema(value_type = Option<String>, example = "CRON")]
    pub trigger_type: Option<JsonValue>,
}

impl TriggerReqBody {
    pub fn trigger_type(&self) -> Option<TriggerType> {
        self.trigger_type
            .as_ref()
            .and_then(JsonValue::as_str)
            .and_then(TriggerType::parse)
    }
}
