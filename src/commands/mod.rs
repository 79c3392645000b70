//! Command handlers
//!
//! Each handler wires infrastructure adapters into a use case and prints
//! the result as text or JSON.

pub mod check;
pub mod create;
pub mod resolve;
pub mod sync;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use forge::config::{load_or_default, Config, ConfigWarning};

/// Load config for `project_root` and print any unknown-key warnings.
pub fn load_config(project_root: Option<&Path>, json: bool) -> Config {
    let (config, warnings) = load_or_default(project_root);
    if !json {
        print_config_warnings(&warnings);
    }
    config
}

/// CLI flag, else configured registry path
pub fn registry_dir(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    flag.or_else(|| config.registry.path.clone())
        .context("no registry given; pass --registry or set FORGE_REGISTRY")
}

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
