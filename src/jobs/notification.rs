use chrono::NaiveTime;

use self::{
    candidates::{select_candidates, ReminderWindow},
    dispatch::{dispatch_reminders, DispatchSummary},
};
use crate::app::AppState;

pub mod candidates;
pub mod dispatch;
pub mod google_auth_token;
pub mod push_message;

/// Select the members whose alarm is due around `now` and push the reminder to each of them.
/// Only the candidate query can fail the run.
pub async fn check_and_send_reminders(
    state: &AppState,
    now: NaiveTime,
) -> anyhow::Result<DispatchSummary> {
    let window = ReminderWindow::around(now, state.reminder_window_mins);
    send_reminders_in_window(state, &window).await
}

/// Push the reminder to every member whose alarm falls inside `window`
pub async fn send_reminders_in_window(
    state: &AppState,
    window: &ReminderWindow,
) -> anyhow::Result<DispatchSummary> {
    let candidates = select_candidates(state.store.as_ref(), window).await?;
    tracing::info!("Found {} users with active alarms", candidates.len());
    let summary =
        dispatch_reminders(state.store.as_ref(), state.gateway.as_ref(), &candidates).await;
    tracing::info!("Reminder dispatch finished: {:?}", summary);
    Ok(summary)
}
