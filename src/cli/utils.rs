//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::Config;

/// Options that control where and how repositories are cloned.
#[derive(Args, Debug, Clone, Default)]
pub struct FetchArgs {
    /// Directory that receives clones (defaults to the current directory)
    #[arg(short = 'w', long, value_name = "DIR", env = "REPO_INTAKE_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Shallow clone with this many commits of history
    #[arg(long, value_name = "N")]
    pub depth: Option<u32>,

    /// Branch to check out instead of the remote default
    #[arg(short = 'b', long, value_name = "BRANCH")]
    pub branch: Option<String>,

    /// Do not show a clone progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl FetchArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            workspace_dir: self.workspace.clone(),
            depth: self.depth,
            branch: self.branch.clone(),
            no_progress: self.no_progress,
            readme_names: None,
        }
    }
}

/// Parse a comma-separated string into a `Vec<String>`, trimming whitespace and
/// discarding empty segments.  Returns `None` when `value` is `None`.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_ref().map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
    })
}

/// Load the config file (explicit or discovered in the current directory) and
/// apply command-line overrides.
pub fn resolve_config(config_path: Option<&Path>, overrides: CliOverrides) -> Result<Config> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let file_config = load_config(&cwd, config_path)?;
    Ok(merge_cli_with_config(file_config, overrides))
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", rendered);
    Ok(())
}
