// SPDX-License-Identifier: MIT

//! Raw-match post-processing.
//!
//! Two independent filters over the scanner's output: a word-boundary
//! filter that drops matches embedded inside larger letter runs, and
//! a dedup filter that keeps the first match per tag. They compose in
//! either order; the CLI applies boundary first, then dedup.

use std::collections::HashSet;

use crate::automaton::Match;

/// Keeps only matches that sit on word boundaries.
///
/// A match survives when the character immediately before its start
/// (if any) is not a letter and the character at its end position (if
/// any) is not a letter, so "cat" does not match inside
/// "concatenate". Letter classification is the Unicode
/// letter-category test, not ASCII-only.
pub fn word_bounded<'a, 't>(
    text: &str,
    matches: impl IntoIterator<Item = Match<'a, 't>>,
) -> Vec<Match<'a, 't>> {
    let chars: Vec<char> = text.chars().collect();
    matches
        .into_iter()
        .filter(|m| {
            let letter_before =
                m.start > 0 && chars.get(m.start - 1).is_some_and(|c| c.is_alphabetic());
            let letter_after = chars.get(m.end).is_some_and(|c| c.is_alphabetic());
            !letter_before && !letter_after
        })
        .collect()
}

/// Keeps the first match for each distinct tag, in scan order.
///
/// First occurrence wins; there is no "most specific" tie-break
/// beyond the order matches arrive in.
pub fn dedup_by_tag<'a, 't>(
    matches: impl IntoIterator<Item = Match<'a, 't>>,
) -> Vec<Match<'a, 't>> {
    let mut seen = HashSet::new();
    matches.into_iter().filter(|m| seen.insert(m.tag)).collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
