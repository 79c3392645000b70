//! Conflict marker utilities
//!
//! Non-interactive resolution of files carrying merge conflict blocks.

use std::str::FromStr;

use crate::error::ForgeError;

use super::three_way_merge::{LOCAL_MARKER, REMOTE_MARKER, SEPARATOR_MARKER};

/// Which side of a conflict block to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictSide {
    Local,
    Remote,
}

impl FromStr for ConflictSide {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(ConflictSide::Local),
            "remote" => Ok(ConflictSide::Remote),
            other => Err(ForgeError::InvalidConflictSide(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Outside,
    Local,
    Remote,
}

fn marker(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Keep only `side` of every conflict block and drop all marker lines.
pub fn strip_markers(content: &str, side: ConflictSide) -> String {
    let mut out = String::with_capacity(content.len());
    let mut section = Section::Outside;

    for line in content.split_inclusive('\n') {
        match (section, marker(line)) {
            (Section::Outside, LOCAL_MARKER) => section = Section::Local,
            (Section::Local, SEPARATOR_MARKER) => section = Section::Remote,
            (Section::Remote, REMOTE_MARKER) => section = Section::Outside,
            (Section::Outside, _) => out.push_str(line),
            (Section::Local, _) if side == ConflictSide::Local => out.push_str(line),
            (Section::Remote, _) if side == ConflictSide::Remote => out.push_str(line),
            _ => {}
        }
    }

    out
}

/// Number of conflict blocks in `content`
pub fn count_conflict_blocks(content: &str) -> usize {
    content
        .lines()
        .filter(|line| marker(line) == LOCAL_MARKER)
        .count()
}

pub fn has_conflict_markers(content: &str) -> bool {
    count_conflict_blocks(content) > 0
}
