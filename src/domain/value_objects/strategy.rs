//! Sync strategy value object
//!
//! - `Overwrite`: upstream content replaces the local file
//! - `Merge`: upstream changes are three-way merged into local edits

use serde::{Deserialize, Serialize};

/// How a tracked file is reconciled with upstream during sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SyncStrategy {
    #[default]
    Overwrite,
    Merge,
}

impl SyncStrategy {
    /// Parse a strategy name; anything unrecognized is treated as overwrite.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "merge" => SyncStrategy::Merge,
            _ => SyncStrategy::Overwrite,
        }
    }

    pub fn is_merge(&self) -> bool {
        matches!(self, SyncStrategy::Merge)
    }
}

impl std::fmt::Display for SyncStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncStrategy::Overwrite => write!(f, "overwrite"),
            SyncStrategy::Merge => write!(f, "merge"),
        }
    }
}
