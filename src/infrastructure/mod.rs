//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with atomic writes
//! - `repositories/` - Lockfile and blueprint metadata persistence
//! - `template/` - Variable placeholder renderer
//! - `events/` - Sync event sinks (JSON, console)
//! - `vcs` - Git commit lookup

pub mod events;
pub mod fs;
pub mod repositories;
pub mod template;
pub mod vcs;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use repositories::{load_blueprint, YamlLockfileRepository};
pub use template::{MissingVariable, VariableRenderer};
pub use vcs::GitCli;
