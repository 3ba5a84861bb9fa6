//! Repository intake: fetch a repository, summarize its directory tree and
//! read its README.
//!
//! The three operations are independent:
//!
//! - [`fetch::fetch_repository`] / [`fetch::Fetcher`] clone a remote repository
//!   into `<base>/<name>` unless that directory already exists.
//! - [`scan::summarize_tree`] maps each non-hidden directory to the files it
//!   directly contains.
//! - [`readme::read_readme`] returns the trimmed text of the first README found.
//!
//! [`overview::build_overview`] chains them.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod overview;
pub mod readme;
pub mod scan;
pub mod utils;

pub use domain::{Config, DirListing, FileTree, ReadmeStatus, README_NOT_FOUND};
pub use error::{ErrorReport, IntakeError, IntakeResult};
pub use fetch::{derive_repo_name, fetch_repository, Cloner, Fetcher, GitCloner};
pub use overview::{build_overview, Overview};
pub use readme::{locate_readme, read_readme};
pub use scan::summarize_tree;
