// SPDX-License-Identifier: MIT

//! Single-pass multi-pattern substring search.
//!
//! An Aho-Corasick [`Automaton`] is built once over a fixed pattern
//! set and then scans arbitrarily many texts, each in one linear
//! pass. Raw matches can be post-processed by the [`filter`] module
//! (word-boundary and dedup-by-tag). Everything else — pattern file
//! loading, target reading, normalization, timing — is plumbing
//! around that core.
//!
//! ```
//! use msearch::automaton::AutomatonBuilder;
//!
//! let automaton = AutomatonBuilder::from_patterns(["he", "she", "his", "hers"]);
//! let matches: Vec<_> = automaton.scan("ushers").collect();
//! assert_eq!(matches[0].text, "she");
//! assert_eq!((matches[0].start, matches[0].end), (1, 4));
//! ```

pub mod automaton;
pub mod cli;
pub mod file_reader;
pub mod filter;
pub mod normalize;
pub mod patterns;
pub mod timer;

#[cfg(test)]
pub mod test_utils;

pub use automaton::{Automaton, AutomatonBuilder, Match};
