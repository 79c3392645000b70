//! Create command handler

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use forge::application::{ScaffoldOptions, ScaffoldUseCase};
use forge::domain::ports::VersionControl;
use forge::domain::value_objects::{parse_assignment, Variables};
use forge::infrastructure::{GitCli, LocalFs, VariableRenderer, YamlLockfileRepository};

pub fn cmd_create(
    blueprint: &str,
    dir: &Path,
    registry: Option<PathBuf>,
    vars: &[String],
    git_ref: Option<String>,
    json: bool,
) -> Result<()> {
    let config = super::load_config(None, json);
    let registry = super::registry_dir(registry, &config)?;

    let mut variables = Variables::new();
    for raw in vars {
        let Some((key, value)) = parse_assignment(raw) else {
            bail!("invalid --var '{}', expected KEY=VALUE", raw);
        };
        variables.insert(key, value);
    }

    let mut options = ScaffoldOptions::new(&registry, blueprint, dir).with_variables(variables);
    if let Some(git_ref) = git_ref {
        options = options.with_ref(git_ref);
    }
    if let Some(commit) = GitCli.head_commit(&registry) {
        options = options.with_commit(commit);
    }

    let use_case = ScaffoldUseCase::new(
        YamlLockfileRepository::new(),
        LocalFs::new(),
        VariableRenderer::default(),
        VariableRenderer::zero_fill(),
    );
    let result = use_case
        .execute(&options)
        .with_context(|| format!("failed to create {} from {}", dir.display(), blueprint))?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "complete",
                "command": "create",
                "blueprint": blueprint,
                "written": result.written,
                "excluded": result.excluded,
                "tracked": result.lockfile.len(),
            })
        );
    } else {
        println!(
            "Created {} from {} ({} files, {} tracked)",
            dir.display(),
            blueprint,
            result.written.len(),
            result.lockfile.len()
        );
    }
    Ok(())
}
