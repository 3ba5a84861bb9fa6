//! Directory structure summaries

pub mod tree;

pub use tree::{render_tree, summarize_tree};
