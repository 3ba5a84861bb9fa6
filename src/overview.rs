//! Clone, summarize and read a repository in one pass.

use crate::domain::{FileTree, ReadmeStatus};
use crate::error::IntakeResult;
use crate::fetch::{Cloner, Fetcher};
use crate::readme::readme_status;
use crate::scan::summarize_tree;
use serde::Serialize;
use std::path::PathBuf;

/// Everything the intake pipeline learns about one repository.
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub path: PathBuf,
    pub tree: FileTree,
    pub readme: ReadmeStatus,
}

/// Fetch `url`, then summarize its tree and README.
///
/// Fetch and tree errors abort; an unreadable README is reported in
/// [`Overview::readme`].
pub fn build_overview<C: Cloner, S: AsRef<str>>(
    url: &str,
    fetcher: &Fetcher<C>,
    readme_names: &[S],
) -> IntakeResult<Overview> {
    let path = fetcher.fetch(url)?;
    let tree = summarize_tree(&path)?;
    let readme = readme_status(&path, readme_names);
    Ok(Overview { path, tree, readme })
}
