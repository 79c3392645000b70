//! Forge CLI - scaffold projects from blueprints and keep them in sync
//!
//! Usage: forge <COMMAND>
//!
//! Commands:
//!   create   Create a project from a blueprint
//!   check    Report drift against the lockfile and registry
//!   sync     Apply upstream blueprint changes
//!   resolve  Resolve conflict markers by keeping one side

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::sync::SyncArgs;
use forge::application::UnresolvedConflicts;

/// Exit code for a sync that completed with conflicts
const EXIT_CONFLICTS: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.downcast_ref::<UnresolvedConflicts>().is_some() => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_CONFLICTS)
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let json = cli.json;
    match cli.command {
        Commands::Create {
            blueprint,
            dir,
            registry,
            vars,
            git_ref,
        } => commands::create::cmd_create(&blueprint, &dir, registry, &vars, git_ref, json),
        Commands::Check { project, registry } => {
            commands::check::cmd_check(&project, registry, json)
        }
        Commands::Sync {
            project,
            registry,
            base,
            dry_run,
            force,
            file,
        } => commands::sync::cmd_sync(
            SyncArgs {
                project,
                registry,
                base,
                dry_run,
                force,
                file,
            },
            json,
            cli.verbose,
        ),
        Commands::Resolve { file, keep } => commands::resolve::cmd_resolve(&file, &keep, json),
    }
}

/// `FORGE_LOG` wins; otherwise `-v` raises the level from warn.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "forge=info",
        2 => "forge=debug",
        _ => "forge=trace",
    };
    let filter = EnvFilter::try_from_env("FORGE_LOG")
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
