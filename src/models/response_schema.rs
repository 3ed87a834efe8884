use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenericResponse {
    pub success: bool,
    pub message: String,
}

/// response schema for the push notification trigger
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TriggerResponse {
    pub success: bool,
    /// number of candidates processed in this invocation
    pub notifications_sent: usize,
}

/// response schema when the invocation could not complete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// response schema for the default route
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DefaultResponse {
    pub success: bool,
    pub message: String,
    pub version: String,
}
