//! Source layer value object
//!
//! Layers are listed lowest to highest priority: registry-wide defaults,
//! category defaults, then the blueprint's own directory.

use serde::{Deserialize, Serialize};

/// Which level of the defaults-inheritance chain a file came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceLayer {
    RegistryDefault,
    CategoryDefault,
    Blueprint,
}

impl SourceLayer {
    /// Files from default layers are tracked as lockfile `defaults`
    pub fn is_default(&self) -> bool {
        !matches!(self, SourceLayer::Blueprint)
    }
}

impl std::fmt::Display for SourceLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceLayer::RegistryDefault => write!(f, "registry-default"),
            SourceLayer::CategoryDefault => write!(f, "category-default"),
            SourceLayer::Blueprint => write!(f, "blueprint"),
        }
    }
}
