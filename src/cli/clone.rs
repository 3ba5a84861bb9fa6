//! Clone command implementation

use anyhow::Result;
use clap::Args;
use serde_json::json;
use std::path::Path;

use super::utils::{print_json, resolve_config, FetchArgs};
use crate::error::ErrorReport;
use crate::fetch::Fetcher;

#[derive(Args)]
pub struct CloneArgs {
    /// Remote repository URL
    #[arg(value_name = "URL")]
    pub url: String,

    #[command(flatten)]
    pub fetch: FetchArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CloneArgs, config_path: Option<&Path>) -> Result<()> {
    let config = resolve_config(config_path, args.fetch.overrides())?;
    let fetcher = Fetcher::from_config(&config)?;

    match fetcher.fetch(&args.url) {
        Ok(path) => {
            if args.json {
                print_json(&json!({ "path": path }))?;
            } else {
                println!("{}", path.display());
            }
            Ok(())
        }
        Err(err) => {
            if args.json {
                print_json(&ErrorReport::from(&err))?;
            }
            Err(err.into())
        }
    }
}
