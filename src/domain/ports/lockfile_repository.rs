//! LockfileRepository port - abstraction for lockfile persistence
//!
//! The use cases load and save lockfiles through this trait without knowing
//! the on-disk format.

use std::path::{Path, PathBuf};

use crate::domain::entities::Lockfile;

/// Result type for lockfile operations
pub type LockfileResult<T> = Result<T, LockfileError>;

/// Lockfile operation errors
#[derive(Debug, thiserror::Error)]
pub enum LockfileError {
    /// No lockfile where one is required
    #[error("lockfile not found: {} (is this a forge project?)", .0.display())]
    NotFound(PathBuf),
    /// Lockfile could not be read or written
    #[error("lockfile I/O error on {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
    /// Lockfile content is malformed
    #[error("invalid lockfile {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
    /// Lockfile could not be serialized
    #[error("failed to serialize lockfile: {0}")]
    Serialize(String),
}

/// Abstract repository for lockfile persistence
pub trait LockfileRepository {
    /// Load the lockfile at `path`; a missing file is an error
    fn load(&self, path: &Path) -> LockfileResult<Lockfile>;

    /// Persist the whole document at `path`
    fn save(&self, lockfile: &Lockfile, path: &Path) -> LockfileResult<()>;
}
