//! Sync Event Port
//!
//! Provides an observable interface for sync operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

/// Event emitted during sync operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// Sync started
    Started {
        project: PathBuf,
        registry: PathBuf,
        tracked_count: usize,
        dry_run: bool,
    },

    /// File was (or, in dry-run, would be) rewritten
    FileUpdated { path: String, strategy: String },

    /// File needed no change or had no upstream source
    FileSkipped { path: String, reason: String },

    /// Merge left conflict markers in the file
    FileConflicted { path: String, conflicts: usize },

    /// Lockfile was rewritten
    LockfileSaved { path: PathBuf },

    /// Sync completed
    Completed {
        updated_count: usize,
        skipped_count: usize,
        conflict_count: usize,
    },
}

/// Trait for receiving sync events
///
/// Implementations:
/// - `ConsoleEventSink`: human-readable progress on stderr
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait SyncEventSink {
    /// Handle a sync event
    fn on_event(&self, event: SyncEvent);

    /// Whether this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {
    fn on_event(&self, _event: SyncEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
