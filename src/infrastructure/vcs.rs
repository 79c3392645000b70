//! Git adapter for the VersionControl port
//!
//! Shells out to the `git` binary. Failures (no git, not a repository)
//! read as "no commit".

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::VersionControl;

/// VersionControl backed by the `git` CLI
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl VersionControl for GitCli {
    fn head_commit(&self, dir: &Path) -> Option<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(dir)
            .args(["rev-parse", "HEAD"])
            .stderr(Stdio::null())
            .output()
            .ok()?;

        if !output.status.success() {
            tracing::debug!(dir = %dir.display(), "git rev-parse failed");
            return None;
        }

        let commit = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!commit.is_empty()).then_some(commit)
    }
}
