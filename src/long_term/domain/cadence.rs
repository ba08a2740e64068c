//! Recurring duty windows evaluated from completion timestamps.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Recurrence window of an operations duty.
///
/// Windows are evaluated lazily against the completion timestamp at read
/// time. Nothing stored ever expires or resets; a duty simply stops
/// counting as done once the evaluation instant leaves its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CadenceWindow {
    /// Done when completed on the same UTC calendar date as the evaluation
    /// instant.
    Daily,
    /// Done when completed strictly within the trailing seven days.
    Weekly,
}

impl CadenceWindow {
    /// Length of the weekly trailing window in days.
    const WEEKLY_SPAN_DAYS: i64 = 7;

    /// Returns whether a duty completed at `completed_at` counts as done at
    /// the evaluation instant `now`.
    ///
    /// A duty never completed is never done. Daily compares UTC calendar
    /// dates, so 23:55 still honours a mark from 00:05 the same day and
    /// 00:01 the next day does not. Weekly requires the completion to lie
    /// strictly after `now` minus seven days: a mark exactly seven days
    /// old has expired.
    #[must_use]
    pub fn satisfied_by(self, completed_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        match (self, completed_at) {
            (_, None) => false,
            (Self::Daily, Some(completed)) => completed.date_naive() == now.date_naive(),
            (Self::Weekly, Some(completed)) => {
                completed > now - Duration::days(Self::WEEKLY_SPAN_DAYS)
            }
        }
    }
}

/// Snapshot of both recurring duties at one evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CadenceStatus {
    /// Whether the daily comment check is done for the current date.
    pub daily_check_done: bool,
    /// Whether the weekly cover refresh is done for the trailing week.
    pub weekly_cover_done: bool,
}
