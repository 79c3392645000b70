//! Conflict reporting
//!
//! Summarizes files left with conflict markers and turns them into a
//! typed error, so a run that finished with conflicts stays
//! distinguishable from one that failed.

use std::io::Write;
use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::domain::services::{count_conflict_blocks, strip_markers, ConflictSide};
use crate::error::ForgeResult;

use super::sync::ConflictFile;

/// A sync that completed but left merge conflicts on disk
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sync completed with unresolved conflicts in {} file(s)", .files.len())]
pub struct UnresolvedConflicts {
    pub files: Vec<ConflictFile>,
}

/// Write a per-file summary to `sink` and return the conflicts as an error.
///
/// An empty list writes nothing. Write failures on `sink` are ignored;
/// the returned error still carries every file.
pub fn report<W: Write + ?Sized>(
    sink: &mut W,
    files: &[ConflictFile],
) -> Result<(), UnresolvedConflicts> {
    if files.is_empty() {
        return Ok(());
    }

    let _ = writeln!(
        sink,
        "Merge conflicts in {} {}:",
        files.len(),
        plural(files.len(), "file", "files")
    );
    for file in files {
        let _ = writeln!(
            sink,
            "  {} ({} {})",
            file.path,
            file.count(),
            plural(file.count(), "conflict", "conflicts")
        );
    }

    Err(UnresolvedConflicts {
        files: files.to_vec(),
    })
}

/// Resolve every conflict block in `path` in place, keeping `side`.
///
/// Returns the number of blocks resolved; a file without markers is left
/// untouched.
pub fn resolve_file<FS: FileSystem>(fs: &FS, path: &Path, side: ConflictSide) -> ForgeResult<usize> {
    let bytes = fs.read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    let blocks = count_conflict_blocks(&content);
    if blocks == 0 {
        return Ok(0);
    }

    let resolved = strip_markers(&content, side);
    fs.write(path, resolved.as_bytes())?;
    tracing::debug!(path = %path.display(), blocks, ?side, "resolved conflicts");
    Ok(blocks)
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
