//! Domain Layer
//!
//! The core of Forge: registry layering, drift classification and merging.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (FileSet, Lockfile, Blueprint)
//! - `value_objects/` - Immutable value types (ContentHash, SyncStrategy, FileStatus)
//! - `services/` - Domain services (LayerResolver, ConditionEvaluator, merge)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **Ports & Adapters** - Project files, lockfiles and templates go through trait-defined ports
//! 2. **Pure Functions** - Merge and marker handling never touch the disk
//! 3. **Content hashes only** - Change detection never trusts timestamps

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
