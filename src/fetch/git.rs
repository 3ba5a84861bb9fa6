//! Git cloning through libgit2

use crate::fetch::{remove_partial_clone, Cloner};
use git2::build::RepoBuilder;
use git2::{FetchOptions, RemoteCallbacks, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// [`Cloner`] backed by `git2`, with optional shallow depth, branch and a
/// transfer progress bar on stderr.
#[derive(Debug, Clone, Default)]
pub struct GitCloner {
    depth: Option<u32>,
    branch: Option<String>,
    progress: bool,
}

impl GitCloner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow clone depth; `None` clones full history.
    pub fn depth(mut self, depth: Option<u32>) -> Self {
        self.depth = depth;
        self
    }

    pub fn branch(mut self, branch: Option<String>) -> Self {
        self.branch = branch;
        self
    }

    pub fn progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    fn clone_once(&self, url: &str, dest: &Path, depth: Option<u32>) -> Result<Repository, git2::Error> {
        let bar = self.progress.then(transfer_bar);

        let mut callbacks = RemoteCallbacks::new();
        if let Some(bar) = &bar {
            let bar = bar.clone();
            callbacks.transfer_progress(move |stats| {
                bar.set_length(stats.total_objects() as u64);
                bar.set_position(stats.received_objects() as u64);
                true
            });
        }

        let mut fo = FetchOptions::new();
        fo.remote_callbacks(callbacks);
        if let Some(depth) = depth {
            fo.depth(i32::try_from(depth).unwrap_or(i32::MAX));
        }

        let mut builder = RepoBuilder::new();
        if let Some(branch) = &self.branch {
            builder.branch(branch);
        }
        builder.fetch_options(fo);

        let result = builder.clone(url, dest);
        if let Some(bar) = bar {
            bar.finish_and_clear();
        }
        result
    }
}

impl Cloner for GitCloner {
    fn clone_into(&self, url: &str, dest: &Path) -> Result<(), git2::Error> {
        if self.depth.is_none() {
            return self.clone_once(url, dest, None).map(drop);
        }

        // Not every transport supports shallow fetches: fall back to a full clone.
        let existed = dest.exists();
        match self.clone_once(url, dest, self.depth) {
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::debug!("Shallow clone from {url} failed ({e}); retrying full clone");
                if !existed && dest.exists() {
                    remove_partial_clone(dest);
                }
                self.clone_once(url, dest, None).map(drop)
            }
        }
    }
}

fn transfer_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos:>6}/{len:6} objects",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("##-");
    bar.set_style(style);
    bar
}
