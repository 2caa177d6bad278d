//! Apply command implementation

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::info;

use lingo_progress::{ActivityEvent, ProgressEngine, ProgressEvent};

use super::read_progress;

/// Apply one activity to a snapshot and print the updated record as JSON
pub fn apply_command(
    engine: &ProgressEngine,
    progress_path: &Path,
    kind: String,
    succeeded: bool,
    now: Option<&str>,
    lesson: Option<String>,
) -> Result<()> {
    let progress = read_progress(progress_path)?;

    let timestamp = match now {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("Invalid --now timestamp: {}", raw))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let mut event = ActivityEvent::new(kind, succeeded, timestamp);
    if let Some(lesson_id) = lesson {
        event = event.with_lesson(lesson_id);
    }

    let outcome = engine
        .apply_event(&progress, &event)
        .context("Activity rejected, progress left unchanged")?;

    for event in &outcome.events {
        info!("{}", describe(event));
    }

    println!("{}", serde_json::to_string_pretty(&outcome.progress)?);
    Ok(())
}

fn describe(event: &ProgressEvent) -> String {
    match event {
        ProgressEvent::XpAwarded {
            amount,
            kind,
            succeeded,
        } => format!(
            "+{} XP for {} {}",
            amount,
            kind,
            if *succeeded { "success" } else { "attempt" }
        ),
        ProgressEvent::LevelUp {
            old_level,
            new_level,
        } => format!("Level up! {} -> {}", old_level, new_level),
        ProgressEvent::StreakExtended { count } => format!("Streak extended to {} days", count),
        ProgressEvent::StreakBroken { previous } => {
            format!("Streak of {} days broken", previous)
        }
        ProgressEvent::MilestoneReached { kind, threshold } => {
            format!("Milestone reached: {} {}", kind, threshold)
        }
    }
}
