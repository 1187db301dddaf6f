//! The frozen Aho-Corasick automaton and its transition function.
//!
//! An [`AhoCorasick`] value is produced by
//! [`AhoCorasickBuilder`](builder::AhoCorasickBuilder) and is immutable from
//! then on: states are trie nodes stored in an arena, and the only
//! operation is mapping `(state, symbol)` to the next state. Scanning logic
//! lives in [`crate::scanner`].

pub mod builder;
pub(crate) mod node;

use crate::automaton::builder::{AhoCorasickBuilder, BuildError};
use crate::automaton::node::{Node, ROOT};
use crate::scanner::{MatchTable, Scanner};
use crate::symbol::Symbol;
use std::sync::Arc;

/// Opaque handle to an automaton state.
///
/// A `StateId` is only meaningful for the automaton that produced it.
/// It is the entire mutable footprint of a scan, which is what makes
/// pausing and resuming a scan a matter of keeping one copy of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(pub(crate) usize);

/// An immutable Aho-Corasick automaton over symbol unit `U`.
///
/// Built once from a dictionary of patterns, then read-only for the rest
/// of its lifetime. Cloning is cheap (the node arena is behind an `Arc`),
/// and any number of scans may run against the same automaton
/// concurrently, each carrying its own [`StateId`] cursor.
///
/// # Example
///
/// ```rust,ignore
/// let ac: AhoCorasick = AhoCorasick::build(["a", "ab", "bc"])?;
/// let matches = ac.scan("abc");
/// assert_eq!(matches.offsets(2), &[1]); // "ab" ends at offset 1
/// ```
#[derive(Clone, Debug)]
pub struct AhoCorasick<U: Symbol = char> {
    pub(crate) nodes: Arc<Vec<Node<U>>>,
    pub(crate) pattern_count: u32,
}

impl<U: Symbol> AhoCorasick<U> {
    /// Build an automaton from a dictionary of patterns.
    ///
    /// Patterns are assigned dense 1-based ids in iteration order. The
    /// whole construction aborts on the first invalid entry; no partial
    /// automaton is ever returned.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyPattern`] if any entry is empty.
    pub fn build<I, S>(patterns: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = AhoCorasickBuilder::new();
        for pattern in patterns {
            builder.insert(pattern.as_ref())?;
        }
        Ok(builder.build())
    }

    /// The start state.
    pub fn root(&self) -> StateId {
        StateId(ROOT)
    }

    /// The goto function: map `(state, symbol)` to the next state.
    ///
    /// Follows the child edge when one exists, otherwise falls back along
    /// suffix links; at the root a missing edge restarts at the root. The
    /// fallback chase is a loop, not recursion, since its length is
    /// bounded only by trie depth and that depth is input-controlled.
    pub fn transition(&self, state: StateId, symbol: U) -> StateId {
        let mut current = state.0;
        loop {
            if let Some(next) = self.nodes[current].child(symbol) {
                return StateId(next);
            }
            if current == ROOT {
                return StateId(ROOT);
            }
            current = self.nodes[current].suffix_link;
        }
    }

    /// The 1-based id of the pattern terminating at `state`, if any.
    pub fn pattern_at(&self, state: StateId) -> Option<u32> {
        self.nodes[state.0].pattern
    }

    /// The suffix link of `state`: the state for the longest proper suffix
    /// of this state's path that is also a path in the trie.
    pub fn suffix_of(&self, state: StateId) -> StateId {
        StateId(self.nodes[state.0].suffix_link)
    }

    /// The dictionary suffix link of `state`: the nearest state along the
    /// suffix-link chain that terminates a pattern, if one exists.
    pub fn dict_suffix_of(&self, state: StateId) -> Option<StateId> {
        self.nodes[state.0].dict_link.map(StateId)
    }

    /// Number of patterns in the dictionary this automaton was built from.
    pub fn pattern_count(&self) -> u32 {
        self.pattern_count
    }

    /// Number of nodes in the trie, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Scan `text` in one pass, collecting every match end offset.
    ///
    /// Equivalent to feeding the whole text to a fresh [`Scanner`].
    /// Offsets are 0-based indices of the last matched symbol unit and are
    /// strictly increasing per pattern. Scanning is total: empty text and
    /// a pattern-less automaton both yield an empty table.
    pub fn scan(&self, text: &str) -> MatchTable {
        let mut scanner = Scanner::new(self);
        scanner.feed(text);
        scanner.finish()
    }
}
