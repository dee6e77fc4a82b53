//! Comment lookup index over raw source text.
//!
//! `syn` attaches `///` doc comments to items as `#[doc]` attributes, but
//! plain `//` comments never reach the syntax tree. The [`CommentIndex`]
//! recovers them: it scans each file's raw text once and records every
//! contiguous run of line comments, keyed by the position where the run ends.
//! The extractor asks "is there a comment block ending immediately above this
//! declaration?" and attaches the answer to the documented type.
//!
//! The index is an explicit, read-only object passed into the extractor.
//! It never holds ambient state and can be built from in-memory strings in
//! tests without touching the filesystem.
//!
//! # Indexing Rules
//!
//! - `//` and `///` lines are comment lines; `//!` lines are file-level docs
//!   and break a block instead of joining it.
//! - A blank (or any non-comment) line ends the current block, so a block
//!   separated from a declaration by a blank line is not associated with it.
//! - The comment marker and at most one following space are stripped; the
//!   rest of the line is preserved verbatim.
//! - Block comments (`/* */`) are not indexed.

use std::collections::HashMap;

use crate::model::CommentBlock;

/// Maps `(file, line)` positions to the comment block ending just above them.
///
/// Positions are 1-based line numbers, matching `proc_macro2::LineColumn`.
/// Files are identified by the index returned from [`CommentIndex::add_file`],
/// which the caller must keep aligned with its own file ordering.
#[derive(Debug, Default)]
pub struct CommentIndex {
    /// Per-file block maps, keyed by the first line after the block.
    files: Vec<HashMap<usize, CommentBlock>>,
}

impl CommentIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans one file's source text and returns its file index.
    pub fn add_file(&mut self, source: &str) -> usize {
        let mut blocks = HashMap::new();
        let mut current: Vec<String> = Vec::new();
        let mut line_no = 0;

        for (i, raw) in source.lines().enumerate() {
            line_no = i + 1;
            if let Some(text) = comment_text(raw.trim_start()) {
                current.push(text);
            } else if !current.is_empty() {
                blocks.insert(line_no, CommentBlock { lines: std::mem::take(&mut current) });
            }
        }

        // A block running to end-of-file ends on the line after the last one.
        if !current.is_empty() {
            blocks.insert(line_no + 1, CommentBlock { lines: current });
        }

        self.files.push(blocks);
        self.files.len() - 1
    }

    /// Returns the comment block whose last line is `line - 1` in `file`,
    /// if any.
    #[must_use]
    pub fn block_ending_at(&self, file: usize, line: usize) -> Option<&CommentBlock> {
        self.files.get(file)?.get(&line)
    }

    /// Number of files the index has scanned.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Classifies a trimmed line: `Some(text)` for an indexable comment line,
/// `None` for everything else (including `//!` inner docs).
fn comment_text(line: &str) -> Option<String> {
    if line.starts_with("//!") {
        return None;
    }
    let rest = line.strip_prefix("///").or_else(|| line.strip_prefix("//"))?;
    Some(rest.strip_prefix(' ').unwrap_or(rest).to_string())
}
