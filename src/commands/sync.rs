//! Sync command handler

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use forge::application::{report, SyncOptions, SyncUseCase};
use forge::config::Verbosity;
use forge::domain::ports::{SyncEventSink, VersionControl};
use forge::infrastructure::{
    ConsoleEventSink, GitCli, JsonEventSink, LocalFs, VariableRenderer, YamlLockfileRepository,
};

pub struct SyncArgs {
    pub project: PathBuf,
    pub registry: Option<PathBuf>,
    pub base: Option<PathBuf>,
    pub dry_run: bool,
    pub force: bool,
    pub file: Option<String>,
}

pub fn cmd_sync(args: SyncArgs, json: bool, verbose: u8) -> Result<()> {
    let config = super::load_config(Some(&args.project), json);
    let json = json || config.output.json;
    let verbose = verbose > 0 || config.output.verbosity >= Verbosity::Verbose;
    let registry = super::registry_dir(args.registry, &config)?;

    let mut options = SyncOptions::new(&args.project, &registry)
        .with_dry_run(args.dry_run)
        .with_force(args.force);
    if let Some(base) = args.base.or(config.sync.base_dir) {
        options = options.with_base_dir(base);
    }
    if let Some(pattern) = args.file {
        options = options.with_file_filter(pattern);
    }
    if let Some(commit) = GitCli.head_commit(&registry) {
        options = options.with_commit(commit);
    }

    let sink: Arc<dyn SyncEventSink> = if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stderr(verbose))
    };

    let use_case = SyncUseCase::new(
        YamlLockfileRepository::new(),
        LocalFs::new(),
        VariableRenderer::default(),
    )
    .with_events(sink);

    let result = use_case
        .execute(&options)
        .with_context(|| format!("sync failed for {}", args.project.display()))?;

    if let Err(conflicts) = report(&mut io::stderr(), &result.conflict_files) {
        eprintln!("Edit the marked regions or run `forge resolve <file> --keep local|remote`.");
        return Err(conflicts.into());
    }
    Ok(())
}
