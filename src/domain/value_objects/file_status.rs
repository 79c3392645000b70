//! Drift status of a tracked file

use serde::{Deserialize, Serialize};

/// Status of one tracked file relative to the lockfile (and the registry, when given)
///
/// `UpToDate`, `Modified` and `Missing` come from the two-way comparison;
/// the remaining three need a registry checkout to compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileStatus {
    UpToDate,
    Modified,
    Missing,
    ModifiedLocally,
    UpstreamChanged,
    BothChanged,
}

impl FileStatus {
    /// Classify from the two hash comparisons of the three-way check.
    pub fn from_changes(local_changed: bool, upstream_changed: bool) -> Self {
        match (local_changed, upstream_changed) {
            (false, false) => FileStatus::UpToDate,
            (true, false) => FileStatus::ModifiedLocally,
            (false, true) => FileStatus::UpstreamChanged,
            (true, true) => FileStatus::BothChanged,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::UpToDate => "up-to-date",
            FileStatus::Modified => "modified",
            FileStatus::Missing => "missing",
            FileStatus::ModifiedLocally => "modified-locally",
            FileStatus::UpstreamChanged => "upstream-changed",
            FileStatus::BothChanged => "both-changed",
        }
    }

    pub fn is_up_to_date(&self) -> bool {
        matches!(self, FileStatus::UpToDate)
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
