//! README lookup

use crate::domain::{Readme, ReadmeStatus, DEFAULT_README_NAMES};
use crate::error::{IntakeError, IntakeResult};
use std::fs;
use std::path::Path;

/// Find the first existing candidate under `root` and read it.
///
/// Returns `Ok(None)` when no candidate exists. A candidate that exists but
/// cannot be read as UTF-8 text yields [`IntakeError::ReadmeUnreadable`];
/// later candidates are not tried.
pub fn locate_readme<S: AsRef<str>>(root: &Path, candidates: &[S]) -> IntakeResult<Option<Readme>> {
    for name in candidates {
        let name: &str = name.as_ref();
        let path = root.join(name);
        if !path.exists() {
            continue;
        }
        tracing::debug!("Reading README candidate {}", path.display());
        let content = fs::read_to_string(&path).map_err(|source| {
            IntakeError::ReadmeUnreadable { name: name.to_string(), source }
        })?;
        return Ok(Some(Readme { name: name.to_string(), content: content.trim().to_string() }));
    }
    Ok(None)
}

/// [`locate_readme`] folded into a [`ReadmeStatus`].
pub fn readme_status<S: AsRef<str>>(root: &Path, candidates: &[S]) -> ReadmeStatus {
    match locate_readme(root, candidates) {
        Ok(Some(readme)) => ReadmeStatus::Found { name: readme.name, content: readme.content },
        Ok(None) => ReadmeStatus::Missing,
        Err(IntakeError::ReadmeUnreadable { name, source }) => {
            ReadmeStatus::Unreadable { name, error: source.to_string() }
        }
        Err(other) => ReadmeStatus::Unreadable { name: String::new(), error: other.to_string() },
    }
}

/// Read the README under `root` using the default candidate names.
///
/// Always returns a string: the trimmed content, an `Error reading` line when
/// the file exists but is unreadable, or [`crate::domain::README_NOT_FOUND`].
pub fn read_readme(root: &Path) -> String {
    readme_status(root, DEFAULT_README_NAMES).to_text()
}
