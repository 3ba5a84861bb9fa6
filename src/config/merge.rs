//! Apply command-line overrides on top of a loaded config

use crate::domain::{normalize_names, Config};
use std::path::PathBuf;

/// Values supplied on the command line (or through clap's env fallback).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub workspace_dir: Option<PathBuf>,
    pub depth: Option<u32>,
    pub branch: Option<String>,
    pub no_progress: bool,
    pub readme_names: Option<Vec<String>>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(dir) = cli.workspace_dir {
        config.workspace_dir = Some(dir);
    }
    if let Some(depth) = cli.depth {
        config.depth = Some(depth);
    }
    if let Some(branch) = cli.branch {
        config.branch = Some(branch);
    }
    if cli.no_progress {
        config.progress = false;
    }
    if let Some(names) = cli.readme_names {
        config.readme_names = normalize_names(names);
    }
    config
}
