// SPDX-License-Identifier: MIT

//! Pattern list loading.
//!
//! Pattern files hold one pattern per line. A tab splits a line into
//! pattern text and an explicit tag; without one, the tag defaults to
//! the pattern text when the automaton is built. Blank lines are
//! skipped so a trailing newline does not turn into an empty pattern
//! (empty patterns remain legal through the library API).

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// A single search pattern with its optional reporting tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub text: String,
    pub tag: Option<String>,
}

/// Errors from loading a pattern file.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to read patterns file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Loads the ordered pattern list from `path`.
pub fn load(path: &Path) -> Result<Vec<Pattern>, PatternError> {
    let text = fs::read_to_string(path).map_err(|source| PatternError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse(&text))
}

/// Parses pattern lines from already-read text, preserving order.
pub fn parse(text: &str) -> Vec<Pattern> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once('\t') {
            Some((pattern, tag)) => Pattern {
                text: pattern.to_string(),
                tag: Some(tag.to_string()),
            },
            None => Pattern {
                text: line.to_string(),
                tag: None,
            },
        })
        .collect()
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
