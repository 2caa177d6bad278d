//! XP and Level system
//!
//! Levels are derived from total XP and never stored independently.

use serde::Serialize;

/// XP needed per level
pub const XP_PER_LEVEL: u64 = 1000;

/// Level for a total XP amount: `floor(xp / 1000)`
pub const fn derive_level(xp_points: u64) -> u64 {
    xp_points / XP_PER_LEVEL
}

/// Position of a learner inside their current level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub level: u64,
    pub total_xp: u64,
    /// XP at which the current level starts
    pub current_level_xp: u64,
    /// XP at which the next level starts
    pub next_level_xp: u64,
}

impl LevelProgress {
    pub fn new(total_xp: u64) -> Self {
        let level = derive_level(total_xp);
        let current_level_xp = level * XP_PER_LEVEL;

        Self {
            level,
            total_xp,
            current_level_xp,
            next_level_xp: current_level_xp.saturating_add(XP_PER_LEVEL),
        }
    }

    /// XP still missing before the next level
    pub fn xp_to_next(&self) -> u64 {
        self.next_level_xp.saturating_sub(self.total_xp)
    }

    /// Calculate progress to next level (0.0 - 1.0)
    pub fn progress_to_next(&self) -> f64 {
        let xp_in_level = self.total_xp - self.current_level_xp;
        xp_in_level as f64 / XP_PER_LEVEL as f64
    }
}
