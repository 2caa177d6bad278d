//! Milestone command implementation

use anyhow::Result;
use std::path::Path;

use lingo_progress::ProgressEngine;

use super::read_progress;

/// Print the closest milestone, or every ladder's milestone with `all`
pub fn milestone_command(engine: &ProgressEngine, progress_path: &Path, all: bool) -> Result<()> {
    let progress = read_progress(progress_path)?;

    let json = if all {
        serde_json::to_string_pretty(&engine.milestone_candidates(&progress))?
    } else {
        serde_json::to_string_pretty(&engine.next_milestone(&progress))?
    };

    println!("{}", json);
    Ok(())
}
