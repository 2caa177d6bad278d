//! Learner progress records and activity events
//!
//! Field names follow the camelCase form the host application stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a learner's progress.
///
/// Owned by the host. The engine only reads it and returns modified copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub xp_points: u64,
    /// Always `floor(xp_points / 1000)` in records produced by the engine
    pub level: u64,
    pub daily_streak: u32,
    pub last_study_date: DateTime<Utc>,
    /// Lesson ids in completion order; duplicates are not filtered
    #[serde(default)]
    pub completed_lessons: Vec<String>,
}

impl UserProgress {
    /// Fresh record for a learner who has not studied yet
    pub fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            xp_points: 0,
            level: 0,
            daily_streak: 0,
            last_study_date: created_at,
            completed_lessons: Vec::new(),
        }
    }

    pub fn lessons_completed(&self) -> u64 {
        self.completed_lessons.len() as u64
    }
}

/// A learning activity reported by the host.
///
/// `kind` is kept as the raw identifier from the request body and is only
/// parsed when the event is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    pub kind: String,
    pub succeeded: bool,
    pub timestamp: DateTime<Utc>,
    /// Lesson finished by this activity, recorded only on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<String>,
}

impl ActivityEvent {
    pub fn new(kind: impl Into<String>, succeeded: bool, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: kind.into(),
            succeeded,
            timestamp,
            lesson_id: None,
        }
    }

    pub fn with_lesson(mut self, lesson_id: impl Into<String>) -> Self {
        self.lesson_id = Some(lesson_id.into());
        self
    }
}
