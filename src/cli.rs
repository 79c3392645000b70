use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Forge - scaffold projects from blueprints and keep them in sync
#[derive(Parser, Debug)]
#[command(name = "forge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a project from a blueprint
    Create {
        /// Blueprint path inside the registry (e.g. go/api)
        blueprint: String,

        /// Output directory
        dir: PathBuf,

        /// Registry checkout (defaults to config / FORGE_REGISTRY)
        #[arg(short, long)]
        registry: Option<PathBuf>,

        /// Variable assignment, repeatable (key=value)
        #[arg(long = "var", value_name = "KEY=VALUE")]
        vars: Vec<String>,

        /// Registry ref to record in the lockfile
        #[arg(long = "ref", value_name = "REF")]
        git_ref: Option<String>,
    },

    /// Report drift between the project, its lockfile and the registry
    Check {
        /// Project directory
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// Registry checkout for three-way classification
        #[arg(short, long)]
        registry: Option<PathBuf>,
    },

    /// Apply upstream blueprint changes to the project
    Sync {
        /// Project directory
        #[arg(short, long, default_value = ".")]
        project: PathBuf,

        /// Registry checkout with the new blueprint version
        #[arg(short, long)]
        registry: Option<PathBuf>,

        /// Checkout of the version last synced from (merge base)
        #[arg(long)]
        base: Option<PathBuf>,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,

        /// Overwrite every file, ignoring merge strategies
        #[arg(short, long)]
        force: bool,

        /// Only sync files matching this path or glob
        #[arg(long = "file", value_name = "PATTERN")]
        file: Option<String>,
    },

    /// Resolve conflict markers in a file by keeping one side
    Resolve {
        /// File containing conflict markers
        file: PathBuf,

        /// Side to keep: local or remote
        #[arg(long, value_name = "SIDE")]
        keep: String,
    },
}
