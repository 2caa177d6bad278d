//! Daily streak tracking
//!
//! A streak counts consecutive UTC calendar days with at least one activity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::UserProgress;
use crate::error::ProgressError;

/// What to do when an activity is timestamped before the last study date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockSkewPolicy {
    /// Treat the skew like a gap and reset the streak
    #[default]
    Reset,
    /// Leave the streak as it was
    Keep,
    /// Fail the update with [`ProgressError::InvalidTimestamp`]
    Reject,
}

impl ClockSkewPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Keep => "keep",
            Self::Reject => "reject",
        }
    }
}

/// How a streak moved during one update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Same calendar day, nothing changes
    Unchanged,
    /// Exactly one day later
    Extended,
    /// Gap of two or more days, or clock skew under [`ClockSkewPolicy::Reset`]
    Reset,
    /// Clock skew under [`ClockSkewPolicy::Keep`]
    Skewed,
}

/// Whole calendar days between two timestamps, negative when `now` is earlier
pub fn day_difference(previous: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now.date_naive() - previous.date_naive()).num_days()
}

/// Classify the day gap between the last study date and `now`
pub fn classify(
    last_study_date: DateTime<Utc>,
    now: DateTime<Utc>,
    policy: ClockSkewPolicy,
) -> Result<StreakChange, ProgressError> {
    match day_difference(last_study_date, now) {
        0 => Ok(StreakChange::Unchanged),
        1 => Ok(StreakChange::Extended),
        d if d < 0 => match policy {
            ClockSkewPolicy::Reset => Ok(StreakChange::Reset),
            ClockSkewPolicy::Keep => Ok(StreakChange::Skewed),
            ClockSkewPolicy::Reject => Err(ProgressError::InvalidTimestamp {
                previous: last_study_date,
                now,
            }),
        },
        _ => Ok(StreakChange::Reset),
    }
}

impl StreakChange {
    /// Streak value after this change
    pub fn apply(self, streak: u32) -> u32 {
        match self {
            Self::Unchanged | Self::Skewed => streak,
            Self::Extended => streak.saturating_add(1),
            Self::Reset => 0,
        }
    }
}

/// Streak after an activity at `now`, resetting on any gap or clock skew
pub fn compute_streak(previous: &UserProgress, now: DateTime<Utc>) -> u32 {
    match day_difference(previous.last_study_date, now) {
        0 => previous.daily_streak,
        1 => previous.daily_streak.saturating_add(1),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn progress(streak: u32, last: DateTime<Utc>) -> UserProgress {
        UserProgress {
            daily_streak: streak,
            ..UserProgress::new(last)
        }
    }

    #[test]
    fn test_same_day_keeps_streak() {
        let p = progress(3, at(2024, 1, 1, 0));
        assert_eq!(compute_streak(&p, at(2024, 1, 1, 23)), 3);
    }

    #[test]
    fn test_next_day_extends_streak() {
        let p = progress(3, at(2024, 1, 1, 23));
        // One hour later but a new calendar day
        assert_eq!(compute_streak(&p, at(2024, 1, 2, 0)), 4);
    }

    #[test]
    fn test_gap_resets_streak() {
        let p = progress(3, at(2024, 1, 1, 0));
        assert_eq!(compute_streak(&p, at(2024, 1, 3, 0)), 0);
        assert_eq!(compute_streak(&p, at(2024, 1, 5, 0)), 0);
    }

    #[test]
    fn test_clock_skew_resets_streak() {
        let p = progress(3, at(2024, 1, 5, 0));
        assert_eq!(compute_streak(&p, at(2024, 1, 4, 12)), 0);
    }

    #[test]
    fn test_day_difference_ignores_time_of_day() {
        assert_eq!(day_difference(at(2024, 2, 28, 23), at(2024, 2, 29, 0)), 1);
        assert_eq!(day_difference(at(2024, 2, 29, 0), at(2024, 3, 1, 23)), 1);
        assert_eq!(day_difference(at(2024, 3, 1, 0), at(2024, 2, 28, 0)), -2);
    }

    #[test]
    fn test_skew_policies() {
        let last = at(2024, 1, 5, 0);
        let earlier = at(2024, 1, 4, 0);

        assert_eq!(
            classify(last, earlier, ClockSkewPolicy::Reset),
            Ok(StreakChange::Reset)
        );
        assert_eq!(
            classify(last, earlier, ClockSkewPolicy::Keep),
            Ok(StreakChange::Skewed)
        );
        assert_eq!(
            classify(last, earlier, ClockSkewPolicy::Reject),
            Err(ProgressError::InvalidTimestamp {
                previous: last,
                now: earlier
            })
        );
    }

    #[test]
    fn test_reject_policy_accepts_forward_time() {
        let last = at(2024, 1, 5, 0);
        assert_eq!(
            classify(last, at(2024, 1, 6, 0), ClockSkewPolicy::Reject),
            Ok(StreakChange::Extended)
        );
        assert_eq!(
            classify(last, at(2024, 1, 9, 0), ClockSkewPolicy::Reject),
            Ok(StreakChange::Reset)
        );
    }

    #[test]
    fn test_change_apply() {
        assert_eq!(StreakChange::Unchanged.apply(5), 5);
        assert_eq!(StreakChange::Skewed.apply(5), 5);
        assert_eq!(StreakChange::Extended.apply(5), 6);
        assert_eq!(StreakChange::Extended.apply(u32::MAX), u32::MAX);
        assert_eq!(StreakChange::Reset.apply(5), 0);
    }
}
