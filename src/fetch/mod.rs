//! Repository fetching
//!
//! Clones a remote repository into `<base_dir>/<name>`, where `name` is derived
//! from the URL. An existing directory at that location is returned as-is
//! without touching the network or checking what it contains.

use crate::domain::Config;
use crate::error::{IntakeError, IntakeResult};
use std::backtrace::Backtrace;
use std::error::Error as _;
use std::fs;
use std::path::{Path, PathBuf};

pub mod git;

pub use git::GitCloner;

/// Performs the actual clone of `url` into `dest`.
pub trait Cloner {
    fn clone_into(&self, url: &str, dest: &Path) -> Result<(), git2::Error>;
}

impl<F> Cloner for F
where
    F: Fn(&str, &Path) -> Result<(), git2::Error>,
{
    fn clone_into(&self, url: &str, dest: &Path) -> Result<(), git2::Error> {
        self(url, dest)
    }
}

/// Derive the local directory name for a repository URL.
///
/// Trailing slashes are stripped, the last `/`-separated segment is kept and
/// one trailing `.git` suffix is removed:
/// `https://host/org/name.git/` becomes `name`.
///
/// Returns `None` when the result is empty, `.` or `..`.
pub fn derive_repo_name(url: &str) -> Option<String> {
    let trimmed = url.trim_end_matches('/');
    let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
    let name = last.strip_suffix(".git").unwrap_or(last);
    match name {
        "" | "." | ".." => None,
        _ => Some(name.to_string()),
    }
}

/// Ensure a local copy of `url` exists under `base_dir` and return its path.
///
/// If the target directory already exists it is returned without cloning.
/// Clone failures are logged and returned as [`IntakeError::Clone`]; a target
/// directory created by the failed attempt is removed again.
pub fn fetch_repository<C: Cloner + ?Sized>(
    url: &str,
    base_dir: &Path,
    cloner: &C,
) -> IntakeResult<PathBuf> {
    let name = derive_repo_name(url).ok_or_else(|| IntakeError::InvalidRepoUrl(url.to_string()))?;
    let dest = base_dir.join(name);

    if dest.is_dir() {
        tracing::info!("Repository already exists locally at: {}", dest.display());
        return Ok(dest);
    }

    let existed = dest.exists();
    tracing::info!("Cloning repository from {url}...");
    match cloner.clone_into(url, &dest) {
        Ok(()) => {
            tracing::info!("Successfully cloned to {}", dest.display());
            Ok(dest)
        }
        Err(source) => {
            let err = IntakeError::Clone { url: url.to_string(), dest: dest.clone(), source };
            tracing::error!("Error cloning repository: {}", error_chain(&err));
            tracing::debug!("Clone failure backtrace:\n{}", Backtrace::capture());
            if !existed && dest.exists() {
                remove_partial_clone(&dest);
            }
            Err(err)
        }
    }
}

pub(crate) fn remove_partial_clone(dest: &Path) {
    tracing::debug!("Removing partial clone at {}", dest.display());
    if let Err(e) = fs::remove_dir_all(dest) {
        tracing::warn!("Failed to remove partial clone at {}: {}", dest.display(), e);
    }
}

/// Render an error and all of its sources on one line.
fn error_chain(err: &IntakeError) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(&format!("\n  caused by: {cause}"));
        source = cause.source();
    }
    out
}

/// Fetches repositories into a fixed base directory.
pub struct Fetcher<C = GitCloner> {
    base_dir: PathBuf,
    cloner: C,
}

impl Fetcher<GitCloner> {
    /// Build a fetcher with a [`GitCloner`] from configuration.
    ///
    /// Falls back to the current working directory when no workspace
    /// directory is configured.
    pub fn from_config(config: &Config) -> IntakeResult<Self> {
        let base_dir = match &config.workspace_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        let cloner = GitCloner::new()
            .depth(config.depth)
            .branch(config.branch.clone())
            .progress(config.progress);
        Ok(Self::new(base_dir, cloner))
    }
}

impl<C: Cloner> Fetcher<C> {
    pub fn new(base_dir: PathBuf, cloner: C) -> Self {
        Self { base_dir, cloner }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn fetch(&self, url: &str) -> IntakeResult<PathBuf> {
        fetch_repository(url, &self.base_dir, &self.cloner)
    }
}
