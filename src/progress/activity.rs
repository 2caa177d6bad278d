//! Activity kinds and their XP rewards

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProgressError;

/// Kind of learning activity that can award XP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Translation,
    Grammar,
    Vocabulary,
    Pronunciation,
    Writing,
    Quiz,
    Cultural,
}

impl ActivityKind {
    /// Identifier used on the wire and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Translation => "translation",
            Self::Grammar => "grammar",
            Self::Vocabulary => "vocabulary",
            Self::Pronunciation => "pronunciation",
            Self::Writing => "writing",
            Self::Quiz => "quiz",
            Self::Cultural => "cultural",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Translation => "Translation",
            Self::Grammar => "Grammar",
            Self::Vocabulary => "Vocabulary",
            Self::Pronunciation => "Pronunciation",
            Self::Writing => "Writing",
            Self::Quiz => "Quiz",
            Self::Cultural => "Cultural",
        }
    }

    /// Get all activity kinds
    pub fn all() -> &'static [ActivityKind] {
        &[
            Self::Translation,
            Self::Grammar,
            Self::Vocabulary,
            Self::Pronunciation,
            Self::Writing,
            Self::Quiz,
            Self::Cultural,
        ]
    }
}

impl FromStr for ActivityKind {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "translation" => Ok(Self::Translation),
            "grammar" => Ok(Self::Grammar),
            "vocabulary" => Ok(Self::Vocabulary),
            "pronunciation" => Ok(Self::Pronunciation),
            "writing" => Ok(Self::Writing),
            "quiz" => Ok(Self::Quiz),
            "cultural" => Ok(Self::Cultural),
            other => Err(ProgressError::InvalidActivityKind(other.to_string())),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// XP paid for an activity: `success` when it succeeded, `attempt` otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub success: u32,
    pub attempt: u32,
}

impl Reward {
    /// Built-in reward for an activity kind
    pub const fn for_kind(kind: ActivityKind) -> Reward {
        let (success, attempt) = match kind {
            ActivityKind::Translation => (10, 2),
            ActivityKind::Grammar => (15, 3),
            ActivityKind::Vocabulary => (8, 2),
            ActivityKind::Pronunciation => (12, 3),
            ActivityKind::Writing => (20, 5),
            ActivityKind::Quiz => (25, 5),
            ActivityKind::Cultural => (15, 3),
        };
        Reward { success, attempt }
    }

    pub fn xp(&self, succeeded: bool) -> u32 {
        if succeeded { self.success } else { self.attempt }
    }
}

/// XP for an activity outcome using the built-in reward table
pub fn compute_activity_xp(kind: ActivityKind, succeeded: bool) -> u32 {
    Reward::for_kind(kind).xp(succeeded)
}

/// Reward table with optional per-kind overrides on top of the built-in values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewardTable {
    overrides: HashMap<ActivityKind, Reward>,
}

impl RewardTable {
    /// Override the reward for one kind.
    ///
    /// The attempt reward must stay strictly below the success reward.
    pub fn with_override(
        mut self,
        kind: ActivityKind,
        reward: Reward,
    ) -> Result<Self, ProgressError> {
        if reward.attempt >= reward.success {
            return Err(ProgressError::InvalidConfig(format!(
                "reward for {kind}: attempt ({}) must be less than success ({})",
                reward.attempt, reward.success
            )));
        }
        self.overrides.insert(kind, reward);
        Ok(self)
    }

    pub fn get(&self, kind: ActivityKind) -> Reward {
        self.overrides
            .get(&kind)
            .copied()
            .unwrap_or_else(|| Reward::for_kind(kind))
    }

    pub fn xp(&self, kind: ActivityKind, succeeded: bool) -> u32 {
        self.get(kind).xp(succeeded)
    }
}
