use chrono::{Duration, NaiveTime, Timelike};
use std::collections::HashSet;

use crate::{constants::*, database::MemberStore, models::Member};

/// Inclusive `alarm_time` bounds for one store query, formatted `HH:MM`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmTimeRange {
    pub lower: String,
    pub upper: String,
}

/// Inclusive span of minutes of the day.
/// Arithmetic wraps around midnight, so `lower` may be later than `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderWindow {
    lower: NaiveTime,
    upper: NaiveTime,
}

impl ReminderWindow {
    /// `±half_width` minutes around the minute of `now`
    pub fn around(now: NaiveTime, half_width_mins: u32) -> Self {
        let minute = truncate_to_minute(now);
        let half_width = Duration::minutes(i64::from(half_width_mins));
        Self {
            lower: minute - half_width,
            upper: minute + half_width,
        }
    }

    /// The minutes after the one of `previous`, up to and including the one of `now`.
    /// `None` while both fall in the same minute.
    pub fn since(previous: NaiveTime, now: NaiveTime) -> Option<Self> {
        let previous = truncate_to_minute(previous);
        let now = truncate_to_minute(now);
        if previous == now {
            return None;
        }
        Some(Self {
            lower: previous + Duration::minutes(1),
            upper: now,
        })
    }

    /// Store queries covering the window, two of them when it crosses midnight
    pub fn ranges(&self) -> Vec<AlarmTimeRange> {
        let lower = format_minute(self.lower);
        let upper = format_minute(self.upper);
        if self.lower <= self.upper {
            return vec![AlarmTimeRange { lower, upper }];
        }
        vec![
            AlarmTimeRange {
                lower,
                upper: END_OF_DAY.to_owned(),
            },
            AlarmTimeRange {
                lower: START_OF_DAY.to_owned(),
                upper,
            },
        ]
    }
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

fn format_minute(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Fetch the enabled members whose alarm is due in `window`.
/// Any failing query fails the whole selection.
pub async fn select_candidates(
    store: &dyn MemberStore,
    window: &ReminderWindow,
) -> anyhow::Result<Vec<Member>> {
    let mut candidates: Vec<Member> = vec![];
    let mut seen = HashSet::new();
    for range in window.ranges() {
        tracing::debug!("Comparing between {} and {}", range.lower, range.upper);
        let members = store.find_alarm_members(&range).await?;
        for member in members {
            if seen.insert(member.member_id.clone()) {
                candidates.push(member);
            }
        }
    }
    Ok(candidates)
}
