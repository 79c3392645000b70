//! Resolve command handler

use std::path::Path;

use anyhow::{Context, Result};

use forge::application::resolve_file;
use forge::domain::services::ConflictSide;
use forge::infrastructure::LocalFs;

pub fn cmd_resolve(file: &Path, keep: &str, json: bool) -> Result<()> {
    let side: ConflictSide = keep.parse()?;
    let resolved = resolve_file(&LocalFs::new(), file, side)
        .with_context(|| format!("failed to resolve {}", file.display()))?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "complete",
                "command": "resolve",
                "path": file.display().to_string(),
                "resolved": resolved,
            })
        );
    } else if resolved == 0 {
        println!("No conflict markers in {}", file.display());
    } else {
        println!("Resolved {} conflict(s) in {}", resolved, file.display());
    }
    Ok(())
}
