//! Core data types shared across modules

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// README file names checked, in priority order.
pub const DEFAULT_README_NAMES: &[&str] = &["README.md", "README.txt", "readme.md", "readme.txt"];

/// Returned by [`crate::readme::read_readme`] when no candidate exists.
pub const README_NOT_FOUND: &str = "No README file found in the repository.";

/// Files found directly inside one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirListing {
    pub files: Vec<String>,
}

/// Relative directory path (`.` for the root) to its direct files.
pub type FileTree = BTreeMap<String, DirListing>;

/// A README that was found and read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Readme {
    pub name: String,
    pub content: String,
}

/// Outcome of a README lookup, suitable for structured output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReadmeStatus {
    Found { name: String, content: String },
    Missing,
    Unreadable { name: String, error: String },
}

impl ReadmeStatus {
    /// Plain-text rendering: the content, the error line, or the sentinel.
    pub fn to_text(&self) -> String {
        match self {
            ReadmeStatus::Found { content, .. } => content.clone(),
            ReadmeStatus::Missing => README_NOT_FOUND.to_string(),
            ReadmeStatus::Unreadable { name, error } => {
                format!("⚠️ Error reading {name}: {error}")
            }
        }
    }
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base directory for clones; `None` means the current directory.
    pub workspace_dir: Option<PathBuf>,
    #[serde(deserialize_with = "deserialize_names")]
    pub readme_names: Vec<String>,
    /// Shallow clone depth.
    pub depth: Option<u32>,
    pub branch: Option<String>,
    pub progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace_dir: None,
            readme_names: default_readme_names(),
            depth: None,
            branch: None,
            progress: true,
        }
    }
}

pub fn default_readme_names() -> Vec<String> {
    DEFAULT_README_NAMES.iter().map(|name| name.to_string()).collect()
}

/// Accept a list or a comma-separated string; an empty result falls back to
/// the defaults.
fn deserialize_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Names {
        One(String),
        Many(Vec<String>),
    }

    let raw = match Names::deserialize(deserializer)? {
        Names::One(s) => s.split(',').map(str::to_string).collect::<Vec<_>>(),
        Names::Many(list) => list,
    };
    Ok(normalize_names(raw))
}

pub fn normalize_names(raw: Vec<String>) -> Vec<String> {
    let names: Vec<String> = raw
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    if names.is_empty() {
        default_readme_names()
    } else {
        names
    }
}
