//! JSON Event Sink
//!
//! Outputs sync events as NDJSON for CI/automation consumption.

use crate::domain::ports::{SyncEvent, SyncEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl SyncEventSink for JsonEventSink {
    fn on_event(&self, event: SyncEvent) {
        let json = match event {
            SyncEvent::Started {
                project,
                registry,
                tracked_count,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "sync",
                    "project": project.display().to_string(),
                    "registry": registry.display().to_string(),
                    "tracked_count": tracked_count,
                    "dry_run": dry_run,
                })
            }

            SyncEvent::FileUpdated { path, strategy } => {
                serde_json::json!({
                    "event": "item_updated",
                    "command": "sync",
                    "path": path,
                    "strategy": strategy,
                })
            }

            SyncEvent::FileSkipped { path, reason } => {
                serde_json::json!({
                    "event": "item_skipped",
                    "command": "sync",
                    "path": path,
                    "reason": reason,
                })
            }

            SyncEvent::FileConflicted { path, conflicts } => {
                serde_json::json!({
                    "event": "item_conflicted",
                    "command": "sync",
                    "path": path,
                    "conflicts": conflicts,
                })
            }

            SyncEvent::LockfileSaved { path } => {
                serde_json::json!({
                    "event": "lockfile_saved",
                    "command": "sync",
                    "path": path.display().to_string(),
                })
            }

            SyncEvent::Completed {
                updated_count,
                skipped_count,
                conflict_count,
            } => {
                let status = if conflict_count == 0 {
                    "success"
                } else {
                    "conflicts"
                };
                serde_json::json!({
                    "event": "complete",
                    "command": "sync",
                    "status": status,
                    "updated": updated_count,
                    "skipped": skipped_count,
                    "conflicts": conflict_count,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
