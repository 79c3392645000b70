//! Domain Entities
//!
//! - `FileSet` - Resolved output manifest for one blueprint
//! - `Lockfile` - Provenance and per-file hashes of a scaffolded project
//! - `Blueprint` - Metadata from `blueprint.yaml`

mod blueprint;
mod file_set;
mod lockfile;

pub use blueprint::{Blueprint, Condition, ManagedFileSpec};
pub use file_set::{FileEntry, FileSet};
pub use lockfile::{
    BlueprintRef, DefaultEntry, EntryKind, Lockfile, ManagedFileEntry, ToolEntry, TrackedFile,
};
