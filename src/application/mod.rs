//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ScaffoldUseCase` - Materialize a blueprint and record its lockfile
//! - `DriftChecker` - Classify tracked files against lockfile and registry
//! - `SyncUseCase` - Apply upstream changes (overwrite or three-way merge)
//!
//! ## Services
//!
//! - `source` - Upstream source lookup shared by check and sync
//! - `conflict_report` - Conflict summaries and in-place resolution

pub mod check;
pub mod conflict_report;
pub mod scaffold;
pub mod source;
pub mod sync;

pub use check::{CheckResult, DriftChecker, FileUpdate};
pub use conflict_report::{report, resolve_file, UnresolvedConflicts};
pub use scaffold::{ScaffoldOptions, ScaffoldResult, ScaffoldUseCase};
pub use source::{fetch_source, LocatedSource, SourceLocator};
pub use sync::{ConflictFile, SyncOptions, SyncResult, SyncUseCase};
