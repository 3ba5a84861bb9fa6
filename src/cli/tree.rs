//! Tree command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::print_json;
use crate::scan::{render_tree, summarize_tree};

#[derive(Args)]
pub struct TreeArgs {
    /// Local directory to summarize
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Print the tree as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: TreeArgs) -> Result<()> {
    let tree = summarize_tree(&args.path)
        .with_context(|| format!("Failed to summarize {}", args.path.display()))?;

    if args.json {
        print_json(&tree)?;
    } else {
        println!("{}", render_tree(&tree));
    }
    Ok(())
}
