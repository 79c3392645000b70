//! Sync Result
//!
//! Result types for sync operations. Field names are part of the JSON
//! output and stay stable.

use serde::Serialize;

use crate::domain::services::Conflict;

/// A file left with conflict markers by a merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictFile {
    pub path: String,
    pub conflicts: Vec<Conflict>,
}

impl ConflictFile {
    pub fn new(path: impl Into<String>, conflicts: Vec<Conflict>) -> Self {
        Self {
            path: path.into(),
            conflicts,
        }
    }

    /// Number of conflict regions
    pub fn count(&self) -> usize {
        self.conflicts.len()
    }
}

/// Result of a sync operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncResult {
    /// Files written (or, in dry-run, that would be written)
    pub updated: Vec<String>,
    /// Files already current or without an upstream source
    pub skipped: Vec<String>,
    /// Files that still contain conflict markers
    pub conflicts: Vec<String>,
    pub conflict_files: Vec<ConflictFile>,
}

impl SyncResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_changes(&self) -> bool {
        !self.updated.is_empty()
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}
