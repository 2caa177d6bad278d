//! Milestone ladders
//!
//! Three fixed ladders give the learner a near-term goal: total XP, daily
//! streak and number of completed lessons. The "next milestone" is the ladder
//! target the learner is proportionally closest to.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::model::UserProgress;
use crate::error::ProgressError;

pub const XP_LADDER: &[u64] = &[1000, 5000, 10_000, 25_000, 50_000];
pub const STREAK_LADDER: &[u64] = &[7, 30, 90, 180, 365];
pub const LESSON_LADDER: &[u64] = &[10, 50, 100, 250, 500];

/// Which progress value a ladder measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MilestoneKind {
    #[serde(rename = "XP")]
    Xp,
    #[serde(rename = "streak")]
    Streak,
    #[serde(rename = "lessons")]
    Lessons,
}

impl MilestoneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xp => "XP",
            Self::Streak => "streak",
            Self::Lessons => "lessons",
        }
    }

    /// Current value of this ladder's measure for a learner
    pub fn current(&self, progress: &UserProgress) -> u64 {
        match self {
            Self::Xp => progress.xp_points,
            Self::Streak => u64::from(progress.daily_streak),
            Self::Lessons => progress.lessons_completed(),
        }
    }
}

impl fmt::Display for MilestoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distance report for one ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub kind: MilestoneKind,
    pub target: u64,
    pub current: u64,
}

impl Milestone {
    /// Proportional progress `current / target`; above 1.0 past the top tier
    pub fn ratio(&self) -> f64 {
        self.current as f64 / self.target as f64
    }

    /// True once the learner has met the ladder's largest threshold
    pub fn is_max_tier(&self) -> bool {
        self.current >= self.target
    }

    /// Exact comparison of `current / target` by cross-multiplication
    pub fn cmp_ratio(&self, other: &Milestone) -> Ordering {
        let lhs = u128::from(self.current) * u128::from(other.target);
        let rhs = u128::from(other.current) * u128::from(self.target);
        lhs.cmp(&rhs)
    }
}

/// A strictly increasing, non-empty sequence of positive thresholds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    kind: MilestoneKind,
    thresholds: Vec<u64>,
}

impl Ladder {
    pub fn new(kind: MilestoneKind, thresholds: Vec<u64>) -> Result<Self, ProgressError> {
        if thresholds.is_empty() {
            return Err(ProgressError::InvalidConfig(format!(
                "{kind} ladder has no thresholds"
            )));
        }
        if thresholds[0] == 0 {
            return Err(ProgressError::InvalidConfig(format!(
                "{kind} ladder thresholds must be positive"
            )));
        }
        if thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ProgressError::InvalidConfig(format!(
                "{kind} ladder thresholds must be strictly increasing: {thresholds:?}"
            )));
        }
        Ok(Self { kind, thresholds })
    }

    /// Built-in ladder for a kind
    pub fn default_for(kind: MilestoneKind) -> Self {
        let thresholds = match kind {
            MilestoneKind::Xp => XP_LADDER,
            MilestoneKind::Streak => STREAK_LADDER,
            MilestoneKind::Lessons => LESSON_LADDER,
        };
        Self {
            kind,
            thresholds: thresholds.to_vec(),
        }
    }

    pub fn kind(&self) -> MilestoneKind {
        self.kind
    }

    pub fn thresholds(&self) -> &[u64] {
        &self.thresholds
    }

    /// First threshold strictly above `current`, or the top threshold at max tier
    pub fn target_for(&self, current: u64) -> u64 {
        let top = self.thresholds[self.thresholds.len() - 1];
        self.thresholds
            .iter()
            .copied()
            .find(|&t| t > current)
            .unwrap_or(top)
    }

    pub fn milestone(&self, progress: &UserProgress) -> Milestone {
        let current = self.kind.current(progress);
        Milestone {
            kind: self.kind,
            target: self.target_for(current),
            current,
        }
    }

    /// Thresholds passed when the measured value moves from `before` to `after`
    pub fn crossed(&self, before: u64, after: u64) -> impl Iterator<Item = u64> + '_ {
        self.thresholds
            .iter()
            .copied()
            .filter(move |&t| before < t && t <= after)
    }
}

/// The three ladders in tie-break order: XP, streak, lessons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladders {
    pub xp: Ladder,
    pub streak: Ladder,
    pub lessons: Ladder,
}

impl Default for Ladders {
    fn default() -> Self {
        Self {
            xp: Ladder::default_for(MilestoneKind::Xp),
            streak: Ladder::default_for(MilestoneKind::Streak),
            lessons: Ladder::default_for(MilestoneKind::Lessons),
        }
    }
}

impl Ladders {
    pub fn iter(&self) -> impl Iterator<Item = &Ladder> {
        [&self.xp, &self.streak, &self.lessons].into_iter()
    }

    /// One milestone per ladder, in tie-break order
    pub fn candidates(&self, progress: &UserProgress) -> [Milestone; 3] {
        [
            self.xp.milestone(progress),
            self.streak.milestone(progress),
            self.lessons.milestone(progress),
        ]
    }

    /// Milestone with the highest `current / target` ratio.
    ///
    /// On equal ratios the earlier ladder wins (XP, then streak, then lessons).
    pub fn next(&self, progress: &UserProgress) -> Milestone {
        let [first, rest @ ..] = self.candidates(progress);
        rest.into_iter().fold(first, |best, candidate| {
            if candidate.cmp_ratio(&best) == Ordering::Greater {
                candidate
            } else {
                best
            }
        })
    }
}

/// Next milestone using the built-in ladders
pub fn next_milestone(progress: &UserProgress) -> Milestone {
    Ladders::default().next(progress)
}
