//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod lockfile_repository;
pub mod sync_events;
pub mod template_renderer;
pub mod version_control;

pub use file_system::{FileSystem, FsError, FsResult};
pub use lockfile_repository::{LockfileError, LockfileRepository, LockfileResult};
pub use sync_events::{NoopEventSink, SyncEvent, SyncEventSink};
pub use template_renderer::{TemplateError, TemplateRenderer};
pub use version_control::VersionControl;
