//! Command-line interface for repo-intake
//!
//! Provides `clone`, `tree`, `readme` and `overview` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod clone;
mod overview;
mod readme;
mod tree;
mod utils;

/// Fetch repositories and summarize their layout and README
#[derive(Parser)]
#[command(name = "repo-intake")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (repo-intake.toml or repo-intake.yml)
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone a repository into the workspace directory and print its path
    Clone(clone::CloneArgs),

    /// Summarize the files in each directory of a local tree
    Tree(tree::TreeArgs),

    /// Print the README of a local directory
    Readme(readme::ReadmeArgs),

    /// Clone a repository, then summarize its tree and README
    Overview(overview::OverviewArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(std::io::stderr().is_terminal()))
        .with(log_filter(cli.verbose))
        .try_init();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Clone(args) => clone::run(args, config_path),
        Commands::Tree(args) => tree::run(args),
        Commands::Readme(args) => readme::run(args, config_path),
        Commands::Overview(args) => overview::run(args, config_path),
    }
}

/// `RUST_LOG` wins when set; otherwise INFO, or DEBUG with `--verbose`.
fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }))
}
