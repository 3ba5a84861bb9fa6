//! Directory tree summarization.

use crate::domain::FileTree;
use crate::error::{IntakeError, IntakeResult};
use crate::utils::relative_key;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Map every non-hidden directory under `root_path` to the files it directly
/// contains.
///
/// Hidden directories are pruned, so neither they nor anything below them is
/// visited. Hidden files are listed like any other file. File names keep the
/// order in which the filesystem enumerates them. Symlinks are not followed;
/// a symlink to a directory is neither listed nor descended into. Names that
/// are not valid UTF-8 are converted lossily (invalid bytes become U+FFFD).
///
/// Any traversal error, including a missing root, aborts the walk with
/// [`IntakeError::Walk`]. A root that is not a directory is rejected with
/// [`IntakeError::Io`].
pub fn summarize_tree(root_path: &Path) -> IntakeResult<FileTree> {
    if let Ok(meta) = fs::metadata(root_path) {
        if !meta.is_dir() {
            return Err(IntakeError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a directory: {}", root_path.display()),
            )));
        }
    }

    let mut tree = FileTree::new();
    let walker = WalkDir::new(root_path).follow_links(false).into_iter().filter_entry(keep_entry);

    for entry in walker {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            tree.entry(relative_key(root_path, path)).or_default();
            continue;
        }
        if entry.path_is_symlink() && path.is_dir() {
            tracing::debug!("Skipping directory symlink {}", path.display());
            continue;
        }

        let parent = match path.parent() {
            Some(parent) => relative_key(root_path, parent),
            None => ".".to_string(),
        };
        let name = match entry.file_name().to_str() {
            Some(name) => name.to_string(),
            None => {
                tracing::debug!("Non UTF-8 file name under {}", path.display());
                entry.file_name().to_string_lossy().to_string()
            }
        };
        tree.entry(parent).or_default().files.push(name);
    }

    tracing::debug!("Summarized {} directories under {}", tree.len(), root_path.display());
    Ok(tree)
}

fn keep_entry(entry: &DirEntry) -> bool {
    // The walk root is kept even when its own name is hidden.
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    !entry.file_name().to_string_lossy().starts_with('.')
}

/// Plain-text rendering: one `dir/` header per directory followed by its
/// files, indented.
pub fn render_tree(tree: &FileTree) -> String {
    let mut lines = Vec::new();
    for (dir, listing) in tree {
        lines.push(format!("{}/", dir));
        for file in &listing.files {
            lines.push(format!("    {}", file));
        }
    }
    lines.join("\n")
}
