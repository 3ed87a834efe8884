use chrono::{NaiveTime, Utc};
use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};

use super::notification::{
    candidates::ReminderWindow, dispatch::DispatchSummary, send_reminders_in_window,
};
use crate::{app::AppState, constants::*};

/// Remembers the last tick so consecutive ticks never cover the same minute twice
#[derive(Debug, Default)]
pub struct ReminderSchedule {
    last_tick: Option<NaiveTime>,
}

impl ReminderSchedule {
    /// Minutes to cover at `now`: only the current one on the first tick,
    /// afterwards every minute since the previous tick.
    pub fn next_window(&mut self, now: NaiveTime) -> Option<ReminderWindow> {
        let window = match self.last_tick {
            Some(previous) => ReminderWindow::since(previous, now),
            None => Some(ReminderWindow::around(now, 0)),
        };
        self.last_tick = Some(now);
        window
    }
}

/// One scheduler tick. `Ok(None)` when the current minute was already covered.
pub async fn run_reminder_tick(
    state: &AppState,
    schedule: &mut ReminderSchedule,
    now: NaiveTime,
) -> anyhow::Result<Option<DispatchSummary>> {
    let Some(window) = schedule.next_window(now) else {
        tracing::debug!("minute {} already covered", now.format("%H:%M"));
        return Ok(None);
    };
    let summary = send_reminders_in_window(state, &window).await?;
    Ok(Some(summary))
}

/// In-process replacement for the external CRON trigger, runs the reminder check every minute
pub async fn reminder_job(state: Arc<AppState>) {
    tracing::debug!("initializing reminder scheduler job");
    let mut interval = interval(Duration::from_secs(REMINDER_JOB_INTERVAL));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut schedule = ReminderSchedule::default();
    loop {
        interval.tick().await;
        let now = Utc::now().time();
        tracing::debug!("reminder job tick at {}", now.format("%H:%M"));
        if let Err(err) = run_reminder_tick(&state, &mut schedule, now).await {
            tracing::error!("Error in reminder_job => {:?}", err);
        }
    }
}
