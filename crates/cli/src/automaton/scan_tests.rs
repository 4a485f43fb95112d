//! Unit tests for the scanning iterator.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use proptest::prelude::*;

use super::*;
use crate::automaton::{AutomatonBuilder, Match};

fn collect<'a>(automaton: &'a Automaton, text: &'static str) -> Vec<Match<'a, 'static>> {
    automaton.scan(text).collect()
}

fn summary<'a>(matches: &'a [Match<'a, 'a>]) -> Vec<(usize, usize, &'a str, &'a str)> {
    matches.iter().map(|m| (m.start, m.end, m.tag, m.text)).collect()
}

#[test]
fn ushers_reports_overlapping_suffix_matches() {
    let automaton = AutomatonBuilder::from_patterns(["he", "she", "his", "hers"]);
    let matches = collect(&automaton, "ushers");
    assert_eq!(
        summary(&matches),
        vec![
            (1, 4, "she", "she"),
            (2, 4, "he", "he"),
            (2, 6, "hers", "hers"),
        ]
    );
}

#[test]
fn overlapping_occurrences_of_one_pattern() {
    let automaton = AutomatonBuilder::from_patterns(["aa"]);
    let matches = collect(&automaton, "aaaa");
    assert_eq!(
        summary(&matches),
        vec![(0, 2, "aa", "aa"), (1, 3, "aa", "aa"), (2, 4, "aa", "aa")]
    );
}

#[test]
fn offsets_count_characters_not_bytes() {
    let automaton = AutomatonBuilder::from_patterns(["ché"]);
    let matches = collect(&automaton, "touché!");
    assert_eq!(summary(&matches), vec![(3, 6, "ché", "ché")]);
}

#[test]
fn scan_is_restartable() {
    let automaton = AutomatonBuilder::from_patterns(["he", "she"]);
    let first: Vec<_> = automaton.scan("she said he did").collect();
    let second: Vec<_> = automaton.scan("she said he did").collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn iterator_is_lazy() {
    let automaton = AutomatonBuilder::from_patterns(["a"]);
    let mut matches = automaton.scan("aaaaaaaaaa");
    assert_eq!(matches.next().map(|m| m.start), Some(0));
    assert_eq!(matches.next().map(|m| m.start), Some(1));
}

#[test]
fn empty_pattern_matches_zero_width_through_the_root() {
    let automaton = AutomatonBuilder::from_patterns([""]);
    let matches = collect(&automaton, "ab");
    assert_eq!(summary(&matches), vec![(1, 1, "", ""), (2, 2, "", "")]);
}

#[test]
fn no_patterns_means_no_matches() {
    let automaton = AutomatonBuilder::from_patterns([]);
    assert_eq!(automaton.scan("any text at all").count(), 0);
}

#[test]
fn empty_text_means_no_matches() {
    let automaton = AutomatonBuilder::from_patterns(["he", "she"]);
    assert_eq!(automaton.scan("").count(), 0);
}

#[test]
fn duplicate_tags_are_reported_per_output() {
    let mut builder = AutomatonBuilder::new();
    builder.insert("he", Some("H"));
    builder.insert("she", Some("H"));
    let automaton = builder.build();
    let matches: Vec<_> = automaton.scan("she").collect();
    assert_eq!(
        summary(&matches),
        vec![(0, 3, "H", "she"), (1, 3, "H", "he")]
    );
}

#[test]
fn concurrent_scans_share_one_automaton() {
    let automaton = AutomatonBuilder::from_patterns(["he", "she"]);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let matches: Vec<_> = automaton.scan("ushers").collect();
                assert_eq!(matches.len(), 2);
            });
        }
    });
}

proptest! {
    /// Every reported match is the claimed substring and equals some
    /// pattern; every literal occurrence is reported at its offset.
    /// ASCII alphabet, so character and byte offsets coincide.
    #[test]
    fn scan_is_sound_and_complete(
        patterns in proptest::collection::vec("[ab]{1,4}", 1..6),
        text in "[ab]{0,40}",
    ) {
        let automaton = AutomatonBuilder::from_patterns(patterns.iter().map(String::as_str));
        let matches: Vec<_> = automaton.scan(&text).collect();

        for m in &matches {
            prop_assert_eq!(&text[m.start..m.end], m.text);
            prop_assert!(patterns.iter().any(|p| p == m.text));
        }

        for p in &patterns {
            for start in 0..text.len() {
                if text[start..].starts_with(p.as_str()) {
                    prop_assert!(
                        matches.iter().any(|m| m.start == start && m.text == p.as_str()),
                        "missing match of {:?} at {}", p, start
                    );
                }
            }
        }
    }

    /// Rebuilding and rescanning with identical inputs yields an
    /// identical match sequence.
    #[test]
    fn scan_is_deterministic(
        patterns in proptest::collection::vec("[abc]{1,3}", 1..5),
        text in "[abc]{0,30}",
    ) {
        let run = || {
            let automaton =
                AutomatonBuilder::from_patterns(patterns.iter().map(String::as_str));
            automaton
                .scan(&text)
                .map(|m| (m.start, m.end, m.tag.to_string()))
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(run(), run());
    }
}
