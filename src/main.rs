//! repo-intake: fetch repositories and summarize them for codebase analysis
//!
//! Clones a remote repository next to the working directory, summarizes which
//! files live in which directory, and reads its README.

use anyhow::Result;

fn main() -> Result<()> {
    repo_intake::cli::run()
}
