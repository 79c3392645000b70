//! Configuration module for Forge
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FORGE_*)
//! 3. Project config (.forge/config.toml)
//! 4. User config (<config dir>/forge/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_or_default, with_overrides_from, ConfigWarning, PROJECT_CONFIG};
pub use types::{Config, OutputConfig, RegistryConfig, SyncConfig, Verbosity};
