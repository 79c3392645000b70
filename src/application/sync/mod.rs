//! Sync Module
//!
//! Brings a scaffolded project up to date with its blueprint.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`SyncOptions`)
//! - `result` - Result types (`SyncResult`, `ConflictFile`)
//! - `use_case` - Core use case logic (`SyncUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use forge::application::sync::{SyncOptions, SyncUseCase};
//!
//! let use_case = SyncUseCase::new(lockfile_repo, fs, renderer);
//! let result = use_case.execute(&SyncOptions::new(project, registry))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::SyncOptions;
pub use result::{ConflictFile, SyncResult};
pub use use_case::SyncUseCase;
