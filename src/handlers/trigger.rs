use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    app::AppState,
    jobs::notification::check_and_send_reminders,
    models::*,
    utils::{AppError, JsonBody},
};

/// Run the reminder check
///
/// `CRON` and `UPDATE` invocations send the diary reminder to every member whose alarm
/// is due around the current UTC time. Any other type is logged and ignored.
#[utoipa::path(
    post,
    path = "/api/v1/send-push-notification",
    request_body = TriggerReqBody,
    responses(
        (status = 200, description = "Reminder check completed", body = TriggerResponse),
        (status = 400, description = "Invalid JSON body", body = GenericResponse),
        (status = 500, description = "Candidate query failed", body = ErrorResponse),
    ),
    tag = "Notification API"
)]
pub async fn send_push_notification_handler(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<TriggerReqBody>,
) -> Result<Json<TriggerResponse>, AppError> {
    let now = Utc::now().time();
    tracing::info!("Current server time (UTC): {}", now.format("%H:%M"));
    tracing::info!("Payload: {:?}", body);
    let notifications_sent = match body.trigger_type() {
        Some(trigger_type) => {
            tracing::debug!("running reminder check for {:?}", trigger_type);
            let summary = check_and_send_reminders(&state, now)
                .await
                .map_err(AppError::QueryFailed)?;
            summary.candidates
        }
        None => {
            tracing::info!("Unknown payload type: {:?}", body.trigger_type);
            tracing::info!("Found 0 users with active alarms");
            0
        }
    };
    let res = TriggerResponse {
        success: true,
        notifications_sent,
    };
    Ok(Json(res))
}
