//! Overview command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::utils::{parse_csv, print_json, resolve_config, FetchArgs};
use crate::error::ErrorReport;
use crate::fetch::Fetcher;
use crate::overview::build_overview;
use crate::scan::render_tree;

#[derive(Args)]
pub struct OverviewArgs {
    /// Remote repository URL
    #[arg(value_name = "URL")]
    pub url: String,

    #[command(flatten)]
    pub fetch: FetchArgs,

    /// README file names to try, in order (comma-separated)
    #[arg(long, value_name = "NAMES")]
    pub readme_names: Option<String>,

    /// Print the overview as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: OverviewArgs, config_path: Option<&Path>) -> Result<()> {
    let mut overrides = args.fetch.overrides();
    overrides.readme_names = parse_csv(&args.readme_names);
    let config = resolve_config(config_path, overrides)?;
    let fetcher = Fetcher::from_config(&config)?;

    let overview = match build_overview(&args.url, &fetcher, &config.readme_names) {
        Ok(overview) => overview,
        Err(err) => {
            if args.json {
                print_json(&ErrorReport::from(&err))?;
            }
            return Err(err.into());
        }
    };

    if args.json {
        return print_json(&overview);
    }

    println!("Repository: {}", overview.path.display());
    println!("Directories: {}", overview.tree.len());
    println!("\n{}", render_tree(&overview.tree));
    println!("\nREADME:\n{}", overview.readme.to_text());
    Ok(())
}
