//! CLI command implementations

pub mod apply;
pub mod init;
pub mod milestone;
pub mod xp;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use lingo_progress::UserProgress;

/// Read a progress snapshot from a JSON file, or stdin when the path is "-"
pub fn read_progress(path: &Path) -> Result<UserProgress> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read progress snapshot from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read progress snapshot: {}", path.display()))?
    };

    serde_json::from_str(&content).context("Failed to parse progress snapshot")
}
