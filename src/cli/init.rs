//! Init command implementation

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

use lingo_progress::config::Config;

/// Default configuration content for lingo-progress init
pub const DEFAULT_CONFIG: &str = r#"# lingo-progress configuration
# =============================
#
# Every section is optional. Missing values fall back to the built-in tables.

# ============================================================================
# STREAK
# ============================================================================
#
#   clock_skew - What to do when an activity is dated before the last study day:
#                "reset"  - reset the streak to 0 (default)
#                "keep"   - leave the streak unchanged
#                "reject" - refuse the activity with an InvalidTimestamp error

[streak]
clock_skew = "reset"

# ============================================================================
# REWARDS - XP per activity (success, attempt)
# ============================================================================
#
# Built-in values:
#   translation   10 / 2
#   grammar       15 / 3
#   vocabulary     8 / 2
#   pronunciation 12 / 3
#   writing       20 / 5
#   quiz          25 / 5
#   cultural      15 / 3
#
# The attempt reward must be lower than the success reward.
#
# [rewards.quiz]
# success = 25
# attempt = 5

# ============================================================================
# MILESTONES - strictly increasing thresholds per ladder
# ============================================================================

[milestones]
xp = [1000, 5000, 10000, 25000, 50000]
streak = [7, 30, 90, 180, 365]
lessons = [10, 50, 100, 250, 500]
"#;

/// Write the default config file to `path`, or to ~/.lingo/config.toml
pub fn init_command(path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => match Config::default_path() {
            Some(path) => path,
            None => bail!("Could not determine home directory; pass --config"),
        },
    };

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    info!("Created {}", config_path.display());
    println!("Created {}", config_path.display());

    Ok(())
}
