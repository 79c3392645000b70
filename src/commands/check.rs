//! Check command handler

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use forge::application::{CheckResult, DriftChecker};
use forge::domain::ports::LockfileRepository;
use forge::domain::value_objects::path::LOCKFILE_NAME;
use forge::infrastructure::{LocalFs, VariableRenderer, YamlLockfileRepository};

pub fn cmd_check(project: &Path, registry: Option<PathBuf>, json: bool) -> Result<()> {
    let config = super::load_config(Some(project), json);
    let registry = registry.or(config.registry.path);

    let lockfile = YamlLockfileRepository::new()
        .load(&project.join(LOCKFILE_NAME))
        .context("cannot check project")?;

    let result = DriftChecker::new(LocalFs::new(), VariableRenderer::default())
        .check(&lockfile, project, registry.as_deref())
        .context("drift check failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_text(&result);
    }
    Ok(())
}

fn print_text(result: &CheckResult) {
    let sections = [
        ("Defaults", &result.defaults_updates),
        ("Managed files", &result.managed_updates),
    ];
    for (title, updates) in sections {
        if updates.is_empty() {
            continue;
        }
        println!("{}:", title);
        for update in updates {
            println!("  {:<18} {}", update.status.as_str(), update.path);
        }
    }
    if !result.has_drift() {
        println!("Everything up to date.");
    }
}
