//! Error types for Forge
//!
//! Library code uses `thiserror`; each concern owns its error enum and
//! `ForgeError` wraps them for callers that want a single type.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, LockfileError, TemplateError};
use crate::domain::services::{ConditionError, ResolveError};

/// Result type alias for Forge operations
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Main error type for Forge operations
#[derive(Error, Debug)]
pub enum ForgeError {
    /// Walking the registry failed
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A condition expression could not be evaluated
    #[error(transparent)]
    Condition(#[from] ConditionError),

    /// Rendering a template failed
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Loading or saving the lockfile failed
    #[error(transparent)]
    Lockfile(#[from] LockfileError),

    /// Filesystem port failure
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Blueprint metadata could not be parsed
    #[error("invalid blueprint metadata in {}: {message}", .file.display())]
    InvalidBlueprint { file: PathBuf, message: String },

    /// Config file could not be parsed
    #[error("invalid config {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Target directory was already scaffolded
    #[error("{} already contains a forge lockfile", .path.display())]
    AlreadyScaffolded { path: PathBuf },

    /// Unknown conflict side name
    #[error("invalid conflict side '{0}' (expected 'local' or 'remote')")]
    InvalidConflictSide(String),
}
