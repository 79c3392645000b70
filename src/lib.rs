//! Forge - blueprint scaffolding with ongoing upstream sync
//!
//! Forge materializes projects from a layered registry of blueprints and
//! keeps them in step with the registry afterwards. A lockfile records
//! where each file came from and the hash of what was written, so later
//! runs can tell local edits from upstream changes and reconcile the two
//! by overwrite or a three-way merge.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    CheckResult, DriftChecker, ScaffoldOptions, ScaffoldUseCase, SyncOptions, SyncResult,
    SyncUseCase, UnresolvedConflicts,
};
pub use config::Config;
pub use domain::entities::{Blueprint, FileSet, Lockfile};
pub use domain::services::{merge, strip_markers, LayerResolver, MergeResult};
pub use domain::value_objects::{ContentHash, FileStatus, SyncStrategy};
pub use error::{ForgeError, ForgeResult};
