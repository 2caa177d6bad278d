//! Settings configuration types

use serde::{Deserialize, Serialize};

use crate::progress::{ClockSkewPolicy, LESSON_LADDER, STREAK_LADDER, XP_LADDER};

/// Streak settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSettings {
    /// What happens when an activity is dated before the last study date:
    /// "reset" (default), "keep" or "reject"
    #[serde(default)]
    pub clock_skew: ClockSkewPolicy,
}

/// Milestone ladder thresholds, each strictly increasing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneSettings {
    #[serde(default = "default_xp_ladder")]
    pub xp: Vec<u64>,

    /// Streak ladder in days
    #[serde(default = "default_streak_ladder")]
    pub streak: Vec<u64>,

    /// Completed-lesson count ladder
    #[serde(default = "default_lesson_ladder")]
    pub lessons: Vec<u64>,
}

fn default_xp_ladder() -> Vec<u64> {
    XP_LADDER.to_vec()
}

fn default_streak_ladder() -> Vec<u64> {
    STREAK_LADDER.to_vec()
}

fn default_lesson_ladder() -> Vec<u64> {
    LESSON_LADDER.to_vec()
}

impl Default for MilestoneSettings {
    fn default() -> Self {
        Self {
            xp: default_xp_ladder(),
            streak: default_streak_ladder(),
            lessons: default_lesson_ladder(),
        }
    }
}
