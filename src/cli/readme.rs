//! Readme command implementation

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use super::utils::{parse_csv, print_json, resolve_config};
use crate::config::CliOverrides;
use crate::readme::readme_status;

#[derive(Args)]
pub struct ReadmeArgs {
    /// Local directory to look in
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// README file names to try, in order (comma-separated)
    #[arg(long, value_name = "NAMES")]
    pub readme_names: Option<String>,

    /// Print the lookup result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ReadmeArgs, config_path: Option<&Path>) -> Result<()> {
    let overrides =
        CliOverrides { readme_names: parse_csv(&args.readme_names), ..CliOverrides::default() };
    let config = resolve_config(config_path, overrides)?;

    let status = readme_status(&args.path, &config.readme_names);
    if args.json {
        print_json(&status)?;
    } else {
        println!("{}", status.to_text());
    }
    Ok(())
}
