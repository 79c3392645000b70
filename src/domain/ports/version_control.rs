//! VersionControl port - narrow view of the registry's VCS metadata
//!
//! Drift, merge and resolution never call this; only the outer layer uses it
//! to stamp lockfiles with the registry commit.

use std::path::Path;

pub trait VersionControl {
    /// Commit checked out in `dir`, if it is a repository
    fn head_commit(&self, dir: &Path) -> Option<String>;
}
