// SPDX-License-Identifier: MIT

//! Linear-pass scanning.
//!
//! One current-state variable walks the automaton as the text is
//! consumed character by character; fail links absorb mismatches
//! without ever re-reading input.

use std::collections::VecDeque;
use std::str::CharIndices;

use super::Match;
use super::state::{Automaton, StateId};

impl Automaton {
    /// Scans `text` in a single forward pass, yielding every raw
    /// match in input order.
    ///
    /// Multiple patterns ending at the same position are yielded in
    /// propagation order: the state's own outputs first, then those
    /// inherited along the fail chain, so a suffix pattern follows
    /// the longer pattern it is embedded in. The iterator is finite
    /// and a fresh call restarts the scan from the beginning.
    pub fn scan<'a, 't>(&'a self, text: &'t str) -> Matches<'a, 't> {
        Matches {
            automaton: self,
            text,
            chars: text.char_indices(),
            state: StateId::ROOT,
            pos: 0,
            end_byte: 0,
            recent_starts: VecDeque::with_capacity(self.max_pattern_len),
            // No outputs are reported before the first character is
            // consumed, even when an empty pattern sits on the root.
            next_output: usize::MAX,
        }
    }
}

/// Lazy stream of raw matches over one text.
///
/// Character offsets are tracked for reporting; byte offsets of the
/// most recent characters are kept in a bounded ring so matched
/// substrings slice out of the text in O(1).
#[derive(Debug)]
pub struct Matches<'a, 't> {
    automaton: &'a Automaton,
    text: &'t str,
    chars: CharIndices<'t>,
    state: StateId,
    /// Characters consumed so far; also the exclusive end offset of
    /// any match ending at the current position.
    pos: usize,
    /// Byte offset one past the most recently consumed character.
    end_byte: usize,
    /// Byte offsets of the most recent characters, oldest first,
    /// bounded by the longest pattern length.
    recent_starts: VecDeque<usize>,
    /// Index of the next unreported output at the current state.
    next_output: usize,
}

impl<'a, 't> Iterator for Matches<'a, 't> {
    type Item = Match<'a, 't>;

    fn next(&mut self) -> Option<Match<'a, 't>> {
        loop {
            // Reborrow through the automaton reference itself so the
            // tag keeps the automaton's lifetime, not this call's.
            let automaton: &'a Automaton = self.automaton;
            let outputs = &automaton.states[self.state.0].outputs;
            if self.next_output < outputs.len() {
                let output = &outputs[self.next_output];
                self.next_output += 1;
                return Some(self.emit(output.consumed, &output.tag));
            }
            let (byte, c) = self.chars.next()?;
            self.step(byte, c);
        }
    }
}

impl<'a, 't> Matches<'a, 't> {
    /// Consumes one character: follow fail links until a transition
    /// on `c` exists (the root self-loops on unknown characters),
    /// take it, and expose the new state's outputs.
    fn step(&mut self, byte: usize, c: char) {
        if self.automaton.max_pattern_len > 0 {
            if self.recent_starts.len() == self.automaton.max_pattern_len {
                self.recent_starts.pop_front();
            }
            self.recent_starts.push_back(byte);
        }

        let mut state = self.state;
        self.state = loop {
            if let Some(next) = self.automaton.transition(state, c) {
                break next;
            }
            if state.is_root() {
                break StateId::ROOT;
            }
            state = self.automaton.fail(state);
        };

        self.pos += 1;
        self.end_byte = byte + c.len_utf8();
        self.next_output = 0;
    }

    /// Builds the match record for an output ending at the current
    /// position. A `consumed` of zero yields a zero-width match.
    fn emit(&self, consumed: usize, tag: &'a str) -> Match<'a, 't> {
        let start_byte = if consumed == 0 {
            self.end_byte
        } else {
            self.recent_starts[self.recent_starts.len() - consumed]
        };
        Match {
            start: self.pos - consumed,
            end: self.pos,
            tag,
            text: &self.text[start_byte..self.end_byte],
        }
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
