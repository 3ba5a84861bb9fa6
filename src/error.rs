//! Error types shared by the fetch, tree and readme operations.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by repository intake operations.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The URL does not yield a usable local directory name.
    #[error("cannot derive a directory name from repository URL: {0:?}")]
    InvalidRepoUrl(String),

    /// Cloning the remote repository failed.
    #[error("failed cloning {url} into {}: {source}", .dest.display())]
    Clone {
        url: String,
        dest: PathBuf,
        #[source]
        source: git2::Error,
    },

    /// Walking a directory tree failed.
    #[error("failed walking directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// A README candidate exists but could not be read.
    #[error("Error reading {name}: {source}")]
    ReadmeUnreadable {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for intake operations.
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Failure shape for structured output: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub error: String,
}

impl From<&IntakeError> for ErrorReport {
    fn from(err: &IntakeError) -> Self {
        Self { error: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_display() {
        let err = IntakeError::InvalidRepoUrl("https://host/".to_string());
        assert_eq!(
            err.to_string(),
            "cannot derive a directory name from repository URL: \"https://host/\""
        );
    }

    #[test]
    fn test_clone_display_includes_source_message() {
        let err = IntakeError::Clone {
            url: "https://host/org/name.git".to_string(),
            dest: PathBuf::from("/tmp/name"),
            source: git2::Error::from_str("remote hung up"),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://host/org/name.git"));
        assert!(msg.contains("/tmp/name"));
        assert!(msg.contains("remote hung up"));
    }

    #[test]
    fn test_error_report_serializes_walk_failures() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let report = ErrorReport::from(&IntakeError::Io(io));
        let json = serde_json::to_value(&report).expect("json");
        assert_eq!(json, serde_json::json!({ "error": "IO error: gone" }));
    }

    #[test]
    fn test_readme_unreadable_display() {
        let err = IntakeError::ReadmeUnreadable {
            name: "README.md".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Error reading README.md: denied");
    }
}
