//! Path normalization

use std::path::Path;

pub fn normalize_path(path: &str) -> String {
    // Convert backslashes to forward slashes and normalize
    path.replace('\\', "/")
}

/// Relative key for `path` under `root`, `.` for the root itself.
pub fn relative_key(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => normalize_path(&rel.to_string_lossy()),
        Err(_) => normalize_path(&path.to_string_lossy()),
    }
}
