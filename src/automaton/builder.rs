//! Builder for constructing an [`AhoCorasick`] automaton.
//!
//! The builder owns the mutable trie during construction: patterns are
//! inserted one at a time, then `build()` resolves suffix and dictionary
//! suffix links in a breadth-first pass and freezes the arena into an
//! immutable automaton.

use crate::automaton::node::{Node, ROOT};
use crate::automaton::AhoCorasick;
use crate::symbol::Symbol;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::sync::Arc;

/// Error type for pattern validation failures at build time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// An empty pattern was supplied. The empty string would mark the root
    /// as terminal at every position, so it is rejected outright.
    #[error("pattern at dictionary index {index} is empty")]
    EmptyPattern {
        /// 0-based position of the offending entry in insertion order.
        index: usize,
    },
}

/// Builder for constructing an [`AhoCorasick`] automaton from patterns.
///
/// Patterns receive dense 1-based ids in insertion order. Inserting the
/// same pattern twice rebinds the terminal node to the later id; the
/// earlier id remains allocated and simply never reports a match. Callers
/// that care should deduplicate before inserting.
///
/// # Example
///
/// ```rust,ignore
/// let mut builder = AhoCorasickBuilder::new();
/// builder.insert("he")?;
/// builder.insert("she")?;
/// let ac = builder.build();
/// ```
pub struct AhoCorasickBuilder<U: Symbol = char> {
    nodes: Vec<Node<U>>,
    // Mutable child maps, one per node, parallel to `nodes`. Frozen into
    // sorted edge lists by build().
    children: Vec<FxHashMap<U, usize>>,
    pattern_count: u32,
}

impl<U: Symbol> AhoCorasickBuilder<U> {
    /// Create a builder holding only the root node.
    pub fn new() -> Self {
        AhoCorasickBuilder {
            nodes: vec![Node::root()],
            children: vec![FxHashMap::default()],
            pattern_count: 0,
        }
    }

    /// Insert a pattern, extending the trie one edge per symbol.
    ///
    /// Returns the 1-based id assigned to this pattern.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyPattern`] if `pattern` contains no
    /// symbols.
    pub fn insert(&mut self, pattern: &str) -> Result<u32, BuildError> {
        let units = U::from_str(pattern);
        if units.is_empty() {
            return Err(BuildError::EmptyPattern {
                index: self.pattern_count as usize,
            });
        }

        let mut state = ROOT;
        for unit in units {
            state = match self.children[state].get(&unit) {
                Some(&next) => next,
                None => self.alloc_child(state, unit),
            };
        }

        self.pattern_count += 1;
        let id = self.pattern_count;
        // Later duplicates overwrite the terminal binding.
        self.nodes[state].pattern = Some(id);
        Ok(id)
    }

    /// Number of patterns inserted so far.
    pub fn pattern_count(&self) -> u32 {
        self.pattern_count
    }

    /// Resolve suffix links and freeze the trie into an immutable automaton.
    ///
    /// Consumes the builder; the returned automaton never changes again and
    /// can be shared freely across threads.
    pub fn build(mut self) -> AhoCorasick<U> {
        self.resolve_links();

        let children = std::mem::take(&mut self.children);
        for (node, child_map) in self.nodes.iter_mut().zip(children) {
            node.edges = child_map.into_iter().collect();
            node.edges.sort_unstable_by_key(|(label, _)| *label);
        }

        AhoCorasick {
            nodes: Arc::new(self.nodes),
            pattern_count: self.pattern_count,
        }
    }

    /// Two-phase insertion: the node is pushed fully initialized, then its
    /// index is registered in the parent's child map, so no node is ever
    /// observable half-built.
    fn alloc_child(&mut self, parent: usize, symbol: U) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(Node::child_of(parent, symbol));
        self.children.push(FxHashMap::default());
        self.children[parent].insert(symbol, idx);
        idx
    }

    /// Compute `suffix_link` and `dict_link` for every non-root node.
    ///
    /// Runs in breadth-first order: a node's suffix link is derived from
    /// its parent's, and the parent sits at strictly smaller depth, so BFS
    /// guarantees every link read here is already final.
    fn resolve_links(&mut self) {
        let mut queue: VecDeque<usize> = self.children[ROOT].values().copied().collect();

        while let Some(idx) = queue.pop_front() {
            queue.extend(self.children[idx].values().copied());

            if let Some((parent, symbol)) = self.nodes[idx].parent {
                let suffix = if parent == ROOT {
                    ROOT
                } else {
                    self.step(self.nodes[parent].suffix_link, symbol)
                };
                self.nodes[idx].suffix_link = suffix;
                // The suffix node is shallower, so its own dict link is
                // final; terminal suffix nodes are the link target, others
                // forward theirs.
                self.nodes[idx].dict_link = if self.nodes[suffix].pattern.is_some() {
                    Some(suffix)
                } else {
                    self.nodes[suffix].dict_link
                };
            }
        }
    }

    /// Goto function over the still-mutable trie, used while resolving
    /// links. Iterative: trie depth is input-controlled, so the failure
    /// chase must not recurse.
    fn step(&self, mut state: usize, symbol: U) -> usize {
        loop {
            if let Some(&next) = self.children[state].get(&symbol) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.nodes[state].suffix_link;
        }
    }
}

impl<U: Symbol> Default for AhoCorasickBuilder<U> {
    fn default() -> Self {
        Self::new()
    }
}
