// SPDX-License-Identifier: MIT

//! Automaton construction: goto (trie) phase, then breadth-first
//! failure-link computation with output propagation.

use std::collections::VecDeque;

use super::state::{Automaton, Output, State, StateId};

/// Builds an [`Automaton`] from an ordered set of patterns.
///
/// [`insert`](Self::insert) grows the trie one pattern at a time;
/// [`build`](Self::build) consumes the builder, computes failure
/// links, and hands off the finished automaton. Insertion order is
/// free, but a fixed order yields an identical automaton and match
/// sequence on every run.
#[derive(Debug)]
pub struct AutomatonBuilder {
    states: Vec<State>,
    max_pattern_len: usize,
}

impl Default for AutomatonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AutomatonBuilder {
    /// Creates a builder holding only the root state.
    pub fn new() -> Self {
        Self {
            states: vec![State::new()],
            max_pattern_len: 0,
        }
    }

    /// Builds an automaton straight from untagged patterns.
    pub fn from_patterns<'p, I>(patterns: I) -> Automaton
    where
        I: IntoIterator<Item = &'p str>,
    {
        let mut builder = Self::new();
        for pattern in patterns {
            builder.insert(pattern, None);
        }
        builder.build()
    }

    /// Inserts `pattern`, tagging its matches with `tag` when given
    /// and with the pattern text itself otherwise.
    ///
    /// Inserting the same pattern twice attaches a second identical
    /// output; the dedup filter, not insertion, removes the
    /// redundancy. The same holds for one pattern under two tags:
    /// both outputs sit on the terminal state and both are reported.
    ///
    /// An empty pattern puts its output on the root and matches
    /// (zero-width) wherever a scan passes through the root.
    pub fn insert(&mut self, pattern: &str, tag: Option<&str>) {
        let mut current = StateId::ROOT;
        let mut consumed = 0usize;
        for c in pattern.chars() {
            consumed += 1;
            let existing = self.states[current.0].transitions.get(&c).copied();
            current = match existing {
                Some(next) => next,
                None => {
                    let next = self.add_state();
                    self.states[current.0].transitions.insert(c, next);
                    next
                }
            };
        }
        self.max_pattern_len = self.max_pattern_len.max(consumed);
        let tag = tag.unwrap_or(pattern).to_string();
        self.states[current.0].outputs.push(Output { tag, consumed });
    }

    /// Computes failure links breadth-first and returns the finished
    /// automaton.
    ///
    /// The root fails to itself; its direct children fail to the
    /// root. Every deeper state reached on `c` from parent `r` fails
    /// to the state found by walking `r`'s fail chain until a
    /// transition on `c` exists (the root always qualifies through
    /// its self-loop). Each visited state also inherits the outputs
    /// of its fail target, which BFS order guarantees are complete.
    pub fn build(mut self) -> Automaton {
        let mut queue = VecDeque::new();

        self.states[StateId::ROOT.0].fail = StateId::ROOT;
        let children: Vec<StateId> = self.children_of(StateId::ROOT);
        for child in children {
            self.states[child.0].fail = StateId::ROOT;
            self.inherit_outputs(child);
            queue.push_back(child);
        }

        while let Some(parent) = queue.pop_front() {
            let parent_fail = self.states[parent.0].fail;
            let edges: Vec<(char, StateId)> = self.states[parent.0]
                .transitions
                .iter()
                .map(|(&c, &s)| (c, s))
                .collect();
            for (c, child) in edges {
                let fail = self.fail_target(parent_fail, c);
                self.states[child.0].fail = fail;
                self.inherit_outputs(child);
                queue.push_back(child);
            }
        }

        tracing::debug!(
            states = self.states.len(),
            max_pattern_len = self.max_pattern_len,
            "automaton built"
        );
        Automaton {
            states: self.states,
            max_pattern_len: self.max_pattern_len,
        }
    }

    /// Walks the fail chain from `from` until a state with a
    /// transition on `c` turns up, and returns that transition.
    /// Terminates because the root accepts every character through
    /// its self-loop; amortized O(1) across the whole BFS.
    fn fail_target(&self, mut from: StateId, c: char) -> StateId {
        loop {
            if let Some(&next) = self.states[from.0].transitions.get(&c) {
                return next;
            }
            if from.is_root() {
                return StateId::ROOT;
            }
            from = self.states[from.0].fail;
        }
    }

    /// Extends a state's outputs with those of its (already final)
    /// fail target.
    fn inherit_outputs(&mut self, state: StateId) {
        let fail = self.states[state.0].fail;
        if self.states[fail.0].outputs.is_empty() {
            return;
        }
        let inherited = self.states[fail.0].outputs.clone();
        self.states[state.0].outputs.extend(inherited);
    }

    fn children_of(&self, state: StateId) -> Vec<StateId> {
        self.states[state.0].transitions.values().copied().collect()
    }

    fn add_state(&mut self) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(State::new());
        id
    }
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
