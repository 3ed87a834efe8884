use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::models::DefaultResponse;

/// Default route
///
/// Returns a JSON response with 200 status code and the running version
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Server is running", body = DefaultResponse)
    ),
    tag = "Debugging API"
)]
pub async fn default_route_handler() -> impl IntoResponse {
    let response = DefaultResponse {
        success: true,
        message: "Reminder push dispatcher is running".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    };
    (StatusCode::OK, Json(response))
}
