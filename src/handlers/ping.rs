use axum::Json;
use chrono::Utc;

use crate::models::GenericResponse;

/// Ping endpoint
///
/// Reports the server UTC time, which is what alarm times are compared against
#[utoipa::path(
    get,
    path = "/api/v1/ping",
    responses(
        (status = 200, description = "Get success response from server", body = GenericResponse)
    ),
    tag = "Debugging API"
)]
pub async fn ping_handler() -> Json<GenericResponse> {
    let now = Utc::now().format("%H:%M");
    let res = GenericResponse {
        success: true,
        message: format!("Server running successfully! Current server time (UTC): {now}"),
    };
    Json(res)
}
