// SPDX-License-Identifier: MIT

//! Aho-Corasick automaton for single-pass multi-pattern matching.
//!
//! A fixed set of patterns is compiled into a trie whose states carry
//! failure links (Aho & Corasick, "Efficient string matching: an aid
//! to bibliographic search", CACM 18(6), 1975). Scanning then visits
//! each input character exactly once, no matter how many patterns are
//! loaded.
//!
//! Construction is two-phase and the phases are separated by types:
//! [`AutomatonBuilder`] owns the state graph while patterns are
//! inserted, and `build` consumes it to produce a read-only
//! [`Automaton`]. A shared `&Automaton` can drive any number of
//! concurrent [`scans`](Automaton::scan).

mod build;
mod scan;
mod state;

pub use build::AutomatonBuilder;
pub use scan::Matches;
pub use state::{Automaton, StateId};

use serde::Serialize;

/// A single pattern occurrence within a scanned text.
///
/// `start` and `end` are character offsets (inclusive/exclusive); the
/// borrowed `tag` lives as long as the automaton and `text` as long
/// as the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match<'a, 't> {
    /// Character offset of the first matched character.
    pub start: usize,
    /// Character offset one past the last matched character.
    pub end: usize,
    /// Tag of the pattern that matched.
    pub tag: &'a str,
    /// The matched substring.
    pub text: &'t str,
}
