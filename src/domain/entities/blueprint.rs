//! Blueprint entity - metadata read from `blueprint.yaml`
//!
//! Only the fields the core consumes are modeled; unknown keys are ignored
//! and no schema validation happens here.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{SyncStrategy, Variables};

use super::ToolEntry;

/// A conditional exclusion: when `when` renders to `true`, drop `exclude` paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub when: String,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Condition {
    pub fn new(when: impl Into<String>, exclude: Vec<String>) -> Self {
        Self {
            when: when.into(),
            exclude,
        }
    }
}

/// A file the blueprint keeps synchronized after scaffolding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedFileSpec {
    pub path: String,
    #[serde(default)]
    pub strategy: SyncStrategy,
}

/// Parsed blueprint metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Default variable values, overridden by caller-supplied ones
    #[serde(default)]
    pub variables: Variables,
    /// Output paths never emitted for this blueprint
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub managed_files: Vec<ManagedFileSpec>,
    #[serde(default)]
    pub tools: Vec<ToolEntry>,
}

impl Blueprint {
    /// Declared strategy for an output path, if the blueprint manages it
    pub fn managed_strategy(&self, output_path: &str) -> Option<SyncStrategy> {
        self.managed_files
            .iter()
            .find(|m| m.path == output_path)
            .map(|m| m.strategy)
    }
}
