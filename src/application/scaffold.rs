//! Scaffold Use Case
//!
//! Materializes a blueprint into a new project directory and records the
//! lockfile that later drift checks and syncs rely on:
//! 1. Load blueprint metadata
//! 2. Merge variables (blueprint defaults, then caller values)
//! 3. Resolve the layered file set and apply conditions
//! 4. Write every entry, rendering templates
//! 5. Record defaults and managed files with their content hashes

use std::path::{Path, PathBuf};

use crate::domain::entities::{BlueprintRef, DefaultEntry, FileEntry, Lockfile, ManagedFileEntry};
use crate::domain::ports::{FileSystem, LockfileRepository, TemplateRenderer};
use crate::domain::services::{ConditionEvaluator, LayerResolver};
use crate::domain::value_objects::path::{segments, to_slash, LOCKFILE_NAME};
use crate::domain::value_objects::{merge_variables, ContentHash, SyncStrategy, Variables};
use crate::error::{ForgeError, ForgeResult};
use crate::infrastructure::repositories::load_blueprint;

use super::source::render_bytes;

/// Options for the scaffold use case
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    pub registry_dir: PathBuf,
    /// Slash-separated blueprint path, e.g. `go/api`
    pub blueprint_path: String,
    pub output_dir: PathBuf,
    /// Caller variables, overriding blueprint defaults
    pub variables: Variables,
    pub registry_url: String,
    pub git_ref: String,
    pub commit: String,
}

impl ScaffoldOptions {
    pub fn new(
        registry_dir: impl Into<PathBuf>,
        blueprint_path: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry_dir: registry_dir.into(),
            blueprint_path: blueprint_path.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    pub fn with_commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = commit.into();
        self
    }

    pub fn with_ref(mut self, git_ref: impl Into<String>) -> Self {
        self.git_ref = git_ref.into();
        self
    }

    pub fn with_registry_url(mut self, url: impl Into<String>) -> Self {
        self.registry_url = url.into();
        self
    }
}

/// Result of a scaffold operation
#[derive(Debug, Clone)]
pub struct ScaffoldResult {
    /// Output paths written, in file set order
    pub written: Vec<String>,
    /// Paths removed by conditions
    pub excluded: Vec<String>,
    pub lockfile: Lockfile,
}

/// Scaffold use case
///
/// `renderer` renders file templates; `condition_renderer` evaluates
/// condition expressions and is usually zero-filling.
pub struct ScaffoldUseCase<LR, FS, R, C>
where
    LR: LockfileRepository,
    FS: FileSystem,
    R: TemplateRenderer,
    C: TemplateRenderer,
{
    lockfile_repo: LR,
    file_system: FS,
    renderer: R,
    condition_renderer: C,
}

impl<LR, FS, R, C> ScaffoldUseCase<LR, FS, R, C>
where
    LR: LockfileRepository,
    FS: FileSystem,
    R: TemplateRenderer,
    C: TemplateRenderer,
{
    pub fn new(lockfile_repo: LR, file_system: FS, renderer: R, condition_renderer: C) -> Self {
        Self {
            lockfile_repo,
            file_system,
            renderer,
            condition_renderer,
        }
    }

    pub fn execute(&self, options: &ScaffoldOptions) -> ForgeResult<ScaffoldResult> {
        let lockfile_path = options.output_dir.join(LOCKFILE_NAME);
        if self.file_system.is_file(&lockfile_path) {
            return Err(ForgeError::AlreadyScaffolded {
                path: options.output_dir.clone(),
            });
        }

        let resolver = LayerResolver::new(&options.registry_dir);
        let blueprint_dir = resolver
            .layer_dirs(&options.blueprint_path)
            .pop()
            .map(|d| d.path)
            .unwrap_or_else(|| options.registry_dir.clone());
        let blueprint = load_blueprint(&self.file_system, &blueprint_dir)?;
        let variables = merge_variables(&blueprint.variables, &options.variables);

        let mut files = resolver.resolve(&options.blueprint_path, &blueprint.exclude)?;
        let excluded = ConditionEvaluator::new(&self.condition_renderer).apply(
            &blueprint.conditions,
            &variables,
            &mut files,
        )?;

        let name = if blueprint.name.is_empty() {
            segments(&options.blueprint_path)
                .last()
                .map(|s| s.to_string())
                .unwrap_or_default()
        } else {
            blueprint.name.clone()
        };
        let mut lockfile = Lockfile::new(
            BlueprintRef {
                registry_url: options.registry_url.clone(),
                name,
                path: options.blueprint_path.clone(),
                git_ref: options.git_ref.clone(),
                commit: options.commit.clone(),
            },
            variables,
        );
        lockfile.tools = blueprint.tools.clone();

        let mut written = Vec::with_capacity(files.len());
        for entry in files.iter() {
            let content = self.materialize(entry, &lockfile.variables)?;
            let output_path = entry.output_path().to_string();
            self.file_system
                .write(&options.output_dir.join(&output_path), &content)?;
            let hash = ContentHash::from_bytes(&content).to_string();
            tracing::debug!(path = %output_path, layer = %entry.source_layer, "scaffolded");

            if let Some(strategy) = blueprint.managed_strategy(&output_path) {
                lockfile.managed_files.push(ManagedFileEntry {
                    path: output_path.clone(),
                    strategy,
                    hash,
                });
            } else if entry.source_layer.is_default() {
                lockfile.defaults.push(DefaultEntry {
                    path: output_path.clone(),
                    source: registry_relative(&options.registry_dir, &entry.abs_path),
                    strategy: SyncStrategy::Overwrite,
                    hash,
                });
            }
            written.push(output_path);
        }

        self.lockfile_repo.save(&lockfile, &lockfile_path)?;

        Ok(ScaffoldResult {
            written,
            excluded,
            lockfile,
        })
    }

    fn materialize(&self, entry: &FileEntry, variables: &Variables) -> ForgeResult<Vec<u8>> {
        let bytes = self.file_system.read(&entry.abs_path)?;
        if entry.is_template {
            render_bytes(&self.renderer, &entry.abs_path, bytes, variables)
        } else {
            Ok(bytes)
        }
    }
}

fn registry_relative(root: &Path, abs_path: &Path) -> String {
    abs_path
        .strip_prefix(root)
        .map(to_slash)
        .unwrap_or_else(|_| to_slash(abs_path))
}
