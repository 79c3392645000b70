//! Lockfile entity - provenance of a scaffolded project
//!
//! Records which blueprint a project came from, the variables it was
//! rendered with, and a content hash for every tracked file. It's a pure
//! data structure; persistence lives behind `LockfileRepository` and always
//! rewrites the whole document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{SyncStrategy, Variables};

/// Where the blueprint came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintRef {
    #[serde(default)]
    pub registry_url: String,
    #[serde(default)]
    pub name: String,
    /// Slash-separated path of the blueprint inside the registry (e.g. `go/api`)
    #[serde(default)]
    pub path: String,
    #[serde(default, rename = "ref")]
    pub git_ref: String,
    #[serde(default)]
    pub commit: String,
}

/// A file inherited from a `_defaults` layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultEntry {
    /// Output path inside the project
    pub path: String,
    /// Registry-relative source path
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub strategy: SyncStrategy,
    /// Empty for records written before hashes were tracked
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hash: String,
}

/// A file with an explicitly declared ongoing sync strategy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedFileEntry {
    pub path: String,
    #[serde(default)]
    pub strategy: SyncStrategy,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hash: String,
}

/// Tool pinned by the blueprint (installation is handled elsewhere)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEntry {
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Whether a tracked entry is a default or a managed file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Default,
    Managed,
}

/// Borrowed view over either kind of tracked entry
#[derive(Debug, Clone, Copy)]
pub struct TrackedFile<'a> {
    pub kind: EntryKind,
    pub path: &'a str,
    /// Registry-relative source (defaults only, may be empty)
    pub source: &'a str,
    pub strategy: SyncStrategy,
    pub hash: &'a str,
}

impl TrackedFile<'_> {
    /// Key used to look the file up in a registry checkout
    pub fn lookup_key(&self) -> &str {
        if self.source.is_empty() {
            self.path
        } else {
            self.source
        }
    }

    /// Legacy entries have no recorded hash
    pub fn has_hash(&self) -> bool {
        !self.hash.is_empty()
    }
}

/// Persisted record of a scaffolded project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lockfile {
    pub blueprint: BlueprintRef,
    pub created_at: DateTime<Utc>,
    pub last_synced: DateTime<Utc>,
    #[serde(default)]
    pub forge_version: String,
    #[serde(default)]
    pub variables: Variables,
    #[serde(default)]
    pub defaults: Vec<DefaultEntry>,
    #[serde(default)]
    pub managed_files: Vec<ManagedFileEntry>,
    #[serde(default)]
    pub tools: Vec<ToolEntry>,
}

impl Lockfile {
    /// Create a lockfile stamped with the current time and crate version
    pub fn new(blueprint: BlueprintRef, variables: Variables) -> Self {
        Self::new_at(blueprint, variables, Utc::now())
    }

    pub fn new_at(blueprint: BlueprintRef, variables: Variables, now: DateTime<Utc>) -> Self {
        Self {
            blueprint,
            created_at: now,
            last_synced: now,
            forge_version: env!("CARGO_PKG_VERSION").to_string(),
            variables,
            defaults: Vec::new(),
            managed_files: Vec::new(),
            tools: Vec::new(),
        }
    }

    /// Tracked files in processing order: defaults first, then managed files
    pub fn tracked_files(&self) -> impl Iterator<Item = TrackedFile<'_>> {
        let defaults = self.defaults.iter().map(|d| TrackedFile {
            kind: EntryKind::Default,
            path: &d.path,
            source: &d.source,
            strategy: d.strategy,
            hash: &d.hash,
        });
        let managed = self.managed_files.iter().map(|m| TrackedFile {
            kind: EntryKind::Managed,
            path: &m.path,
            source: "",
            strategy: m.strategy,
            hash: &m.hash,
        });
        defaults.chain(managed)
    }

    pub fn len(&self) -> usize {
        self.defaults.len() + self.managed_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Update the stored hash of a tracked entry. Returns false if no entry matched.
    pub fn set_hash(&mut self, kind: EntryKind, path: &str, hash: impl Into<String>) -> bool {
        let hash = hash.into();
        match kind {
            EntryKind::Default => self
                .defaults
                .iter_mut()
                .find(|d| d.path == path)
                .map(|d| d.hash = hash)
                .is_some(),
            EntryKind::Managed => self
                .managed_files
                .iter_mut()
                .find(|m| m.path == path)
                .map(|m| m.hash = hash)
                .is_some(),
        }
    }

    pub fn touch(&mut self) {
        self.touch_at(Utc::now());
    }

    pub fn touch_at(&mut self, now: DateTime<Utc>) {
        self.last_synced = now;
    }
}
