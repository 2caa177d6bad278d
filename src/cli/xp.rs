//! Xp and level command implementations

use anyhow::Result;

use lingo_progress::{ActivityKind, LevelProgress, ProgressEngine};

/// Print the XP an activity is worth
pub fn xp_command(engine: &ProgressEngine, kind: &str, succeeded: bool) -> Result<()> {
    let kind: ActivityKind = kind.parse()?;
    let xp = engine.compute_activity_xp(kind, succeeded);

    println!(
        "{} ({}): {} XP",
        kind.label(),
        if succeeded { "success" } else { "attempt" },
        xp
    );
    Ok(())
}

/// Print the level for an XP total and the distance to the next one as JSON
pub fn level_command(xp: u64) -> Result<()> {
    let progress = LevelProgress::new(xp);
    tracing::debug!(
        "{} XP to level {}",
        progress.xp_to_next(),
        progress.level.saturating_add(1)
    );

    println!("{}", serde_json::to_string_pretty(&progress)?);
    Ok(())
}
