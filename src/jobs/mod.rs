use std::sync::Arc;

use self::reminder::reminder_job;
use crate::app::AppState;

pub mod notification;
pub mod reminder;

pub fn spawn_all_jobs(state: Arc<AppState>) {
    // spawn job to periodically check for due reminders
    tokio::spawn(async {
        reminder_job(state).await;
    });
}
