//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod file_status;
mod hash;
pub mod path;
mod source_layer;
mod strategy;
mod variables;

pub use file_status::FileStatus;
pub use hash::ContentHash;
pub use source_layer::SourceLayer;
pub use strategy::SyncStrategy;
pub use variables::{merge_variables, parse_assignment, Variables};
