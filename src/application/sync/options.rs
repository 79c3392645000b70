//! Sync Options
//!
//! Configuration types for sync operations.

use std::path::PathBuf;

/// Options for the sync use case
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Scaffolded project root (holds the lockfile)
    pub project_dir: PathBuf,
    /// Registry checkout with the current blueprint content
    pub registry_dir: PathBuf,
    /// Checkout of the version the project was last synced from (merge base)
    pub base_dir: Option<PathBuf>,
    /// Report what would change without writing
    pub dry_run: bool,
    /// Treat every entry as overwrite
    pub force: bool,
    /// Only process entries whose path matches (exact or glob)
    pub file_filter: Option<String>,
    /// Registry commit to record when files are updated
    pub commit: Option<String>,
}

impl SyncOptions {
    pub fn new(project_dir: impl Into<PathBuf>, registry_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            registry_dir: registry_dir.into(),
            base_dir: None,
            dry_run: false,
            force: false,
            file_filter: None,
            commit: None,
        }
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_file_filter(mut self, pattern: impl Into<String>) -> Self {
        self.file_filter = Some(pattern.into());
        self
    }

    pub fn with_commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = Some(commit.into());
        self
    }
}
