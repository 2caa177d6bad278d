//! Configuration loading and management

mod settings;

pub use settings::{MilestoneSettings, StreakSettings};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ProgressError;
use crate::progress::{
    ActivityKind, Ladder, Ladders, MilestoneKind, ProgressEngine, Reward, RewardTable,
};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Streak settings
    #[serde(default)]
    pub streak: StreakSettings,

    /// Reward overrides keyed by activity kind (e.g. `[rewards.quiz]`)
    #[serde(default)]
    pub rewards: HashMap<String, Reward>,

    /// Milestone ladders
    #[serde(default)]
    pub milestones: MilestoneSettings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a directory
    /// Looks for: config.toml, falling back to defaults
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join("config.toml");
        if path.exists() {
            return Self::from_file(&path);
        }

        Ok(Self::default())
    }

    /// User-level config directory (`~/.lingo`)
    pub fn default_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".lingo"))
    }

    /// User-level config file (`~/.lingo/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        Self::default_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load from an explicit path, else the user-level directory, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match Self::default_dir() {
            Some(dir) => Self::from_dir(&dir),
            None => {
                tracing::debug!("No home directory found, using default config");
                Ok(Self::default())
            }
        }
    }

    /// Check reward overrides and ladders without building an engine
    pub fn validate(&self) -> Result<(), ProgressError> {
        self.engine().map(|_| ())
    }

    /// Build a progress engine from this configuration
    pub fn engine(&self) -> Result<ProgressEngine, ProgressError> {
        let mut rewards = RewardTable::default();
        for (name, reward) in &self.rewards {
            let kind: ActivityKind = name.parse()?;
            rewards = rewards.with_override(kind, *reward)?;
        }

        let ladders = Ladders {
            xp: Ladder::new(MilestoneKind::Xp, self.milestones.xp.clone())?,
            streak: Ladder::new(MilestoneKind::Streak, self.milestones.streak.clone())?,
            lessons: Ladder::new(MilestoneKind::Lessons, self.milestones.lessons.clone())?,
        };

        Ok(ProgressEngine::new()
            .with_rewards(rewards)
            .with_ladders(ladders)
            .with_clock_skew(self.streak.clock_skew))
    }
}
