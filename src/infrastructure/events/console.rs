//! Console Event Sink
//!
//! Human-readable sync progress on stderr.

use crate::domain::ports::{SyncEvent, SyncEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink printing one line per file change
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl ConsoleEventSink {
    /// Print to stderr; `verbose` also lists skipped files
    pub fn stderr(verbose: bool) -> Self {
        Self::with_writer(io::stderr(), verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
        }
    }
}

impl SyncEventSink for ConsoleEventSink {
    fn on_event(&self, event: SyncEvent) {
        match event {
            SyncEvent::Started {
                registry,
                tracked_count,
                dry_run,
                ..
            } => {
                let mode = if dry_run { " (dry run)" } else { "" };
                self.line(format!(
                    "Syncing {} tracked files from {}{}",
                    tracked_count,
                    registry.display(),
                    mode
                ));
            }
            SyncEvent::FileUpdated { path, strategy } => {
                self.line(format!("  ✓ {} ({})", path, strategy));
            }
            SyncEvent::FileSkipped { path, reason } => {
                if self.verbose {
                    self.line(format!("  - {} ({})", path, reason));
                }
            }
            SyncEvent::FileConflicted { path, conflicts } => {
                self.line(format!("  ✗ {} ({} conflicts)", path, conflicts));
            }
            SyncEvent::LockfileSaved { .. } => {}
            SyncEvent::Completed {
                updated_count,
                skipped_count,
                conflict_count,
            } => {
                self.line(format!(
                    "{} updated, {} skipped, {} conflicts",
                    updated_count, skipped_count, conflict_count
                ));
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        true
    }
}
