//! Shared fixtures for progress engine tests

use chrono::{DateTime, Utc};
use lingo_progress::{derive_level, UserProgress};

/// Parse an RFC 3339 timestamp
pub fn at(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .expect("Invalid test timestamp")
        .with_timezone(&Utc)
}

/// Build a consistent progress record with `lessons` generated lesson ids
pub fn progress(xp: u64, streak: u32, last_study: &str, lessons: usize) -> UserProgress {
    UserProgress {
        xp_points: xp,
        level: derive_level(xp),
        daily_streak: streak,
        last_study_date: at(last_study),
        completed_lessons: (0..lessons).map(|i| format!("lesson-{}", i + 1)).collect(),
    }
}
