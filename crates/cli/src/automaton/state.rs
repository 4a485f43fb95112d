// SPDX-License-Identifier: MIT

//! Arena-backed state graph.
//!
//! States live in a `Vec` and refer to each other by [`StateId`], so
//! the fail links (which point back up and across the trie) never
//! form ownership cycles.

use std::collections::BTreeMap;

/// Index of a state in the automaton's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// The root state. Always the first arena slot.
    pub const ROOT: StateId = StateId(0);

    /// Whether this id names the root, checked structurally.
    pub fn is_root(self) -> bool {
        self == StateId::ROOT
    }
}

/// A pattern ending at a state: the tag to report on a match and the
/// number of characters the pattern consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Output {
    pub tag: String,
    pub consumed: usize,
}

/// One node of the state graph.
#[derive(Debug, Default)]
pub(crate) struct State {
    /// Outgoing transitions. An ordered map so breadth-first
    /// construction visits children in a fixed order, keeping the
    /// automaton deterministic for a given insertion order.
    pub transitions: BTreeMap<char, StateId>,
    /// Failure target. Meaningful only after construction; the root
    /// fails to itself.
    pub fail: StateId,
    /// Patterns ending at this state, extended during construction
    /// with every output reachable over the fail chain.
    pub outputs: Vec<Output>,
}

impl Default for StateId {
    fn default() -> Self {
        StateId::ROOT
    }
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A fully built, read-only Aho-Corasick automaton.
///
/// Obtainable only by consuming a builder, which guarantees failure
/// links are in place before any scan starts. Scanning never mutates
/// the automaton, so one instance may serve concurrent scans.
#[derive(Debug)]
pub struct Automaton {
    pub(crate) states: Vec<State>,
    /// Character length of the longest inserted pattern.
    pub(crate) max_pattern_len: usize,
}

impl Automaton {
    /// The child reached from `state` on `c`, or `None` when no such
    /// transition was ever inserted. `None` is distinct from a real
    /// transition that happens to lead to the root.
    pub fn transition(&self, state: StateId, c: char) -> Option<StateId> {
        self.states[state.0].transitions.get(&c).copied()
    }

    /// The failure target of `state`. The root's target is the root
    /// itself.
    pub fn fail(&self, state: StateId) -> StateId {
        self.states[state.0].fail
    }

    /// Number of states, root included.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
