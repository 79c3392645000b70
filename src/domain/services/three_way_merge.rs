//! Three-way merge
//!
//! Reconciles local and upstream edits against their common ancestor.
//! The merge is aligned by line position, not by a diff: an inserted or
//! deleted line shifts every later position and may surface as conflicts.
//! Conflict marker output depends on that alignment, so it must stay as is.

use serde::Serialize;

/// Opens the local side of a conflict block
pub const LOCAL_MARKER: &str = "<<<<<<< local";
/// Separates the local and remote sides
pub const SEPARATOR_MARKER: &str = "=======";
/// Closes the remote side of a conflict block
pub const REMOTE_MARKER: &str = ">>>>>>> remote";

/// One line position where local and remote diverged from base and each other
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    /// 1-based line position in the aligned inputs
    pub line: usize,
    pub local_lines: Vec<String>,
    pub remote_lines: Vec<String>,
}

/// Output of a merge
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeResult {
    pub content: Vec<u8>,
    pub conflicts: Vec<Conflict>,
}

impl MergeResult {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    pub fn content_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

/// Split into lines, dropping the single empty line a final newline produces.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

fn line_at<'a>(lines: &[&'a str], i: usize) -> &'a str {
    lines.get(i).copied().unwrap_or("")
}

/// Merge `local` and `remote` against `base`. Pure and deterministic.
pub fn merge(base: &[u8], local: &[u8], remote: &[u8]) -> MergeResult {
    let base_text = String::from_utf8_lossy(base);
    let local_text = String::from_utf8_lossy(local);
    let remote_text = String::from_utf8_lossy(remote);

    let base_lines = split_lines(&base_text);
    let local_lines = split_lines(&local_text);
    let remote_lines = split_lines(&remote_text);

    // No upstream delta
    if base_lines == remote_lines {
        return MergeResult {
            content: local.to_vec(),
            conflicts: Vec::new(),
        };
    }
    // No local delta
    if base_lines == local_lines {
        return MergeResult {
            content: remote.to_vec(),
            conflicts: Vec::new(),
        };
    }

    let len = base_lines
        .len()
        .max(local_lines.len())
        .max(remote_lines.len());
    let mut out: Vec<&str> = Vec::with_capacity(len);
    let mut conflicts = Vec::new();

    for i in 0..len {
        let b = line_at(&base_lines, i);
        let l = line_at(&local_lines, i);
        let r = line_at(&remote_lines, i);

        if l == r {
            out.push(l);
        } else if b == l {
            out.push(r);
        } else if b == r {
            out.push(l);
        } else {
            out.extend([LOCAL_MARKER, l, SEPARATOR_MARKER, r, REMOTE_MARKER]);
            conflicts.push(Conflict {
                line: i + 1,
                local_lines: vec![l.to_string()],
                remote_lines: vec![r.to_string()],
            });
        }
    }

    let mut content = out.join("\n");
    if !content.ends_with('\n') {
        content.push('\n');
    }

    MergeResult {
        content: content.into_bytes(),
        conflicts,
    }
}
