//! Arena node type for the Aho-Corasick trie.

use crate::symbol::Symbol;
use smallvec::SmallVec;

/// Index of the root node in the arena. The root is created before any
/// pattern is inserted and is never removed.
pub(crate) const ROOT: usize = 0;

/// A node in the trie arena.
///
/// Every reference to another node is an index into the arena, so node
/// handles stay valid for the lifetime of the automaton. Absent links are
/// `None` rather than a reserved index.
#[derive(Clone, Debug)]
pub(crate) struct Node<U: Symbol> {
    /// Outgoing edges as (label, target node index), sorted by label once
    /// the automaton is frozen. Empty while the builder's child maps are
    /// still authoritative.
    pub(crate) edges: SmallVec<[(U, usize); 4]>,
    /// 1-based pattern id if this node terminates a dictionary pattern.
    pub(crate) pattern: Option<u32>,
    /// Longest proper suffix of this node's path that is also a path in
    /// the trie. Root links to itself; the link is never followed from root.
    pub(crate) suffix_link: usize,
    /// Nearest node on the suffix-link chain (excluding self) that
    /// terminates a pattern.
    pub(crate) dict_link: Option<usize>,
    /// Parent index and the edge label leading here. `None` only for root.
    pub(crate) parent: Option<(usize, U)>,
}

impl<U: Symbol> Node<U> {
    pub(crate) fn root() -> Self {
        Node {
            edges: SmallVec::new(),
            pattern: None,
            suffix_link: ROOT,
            dict_link: None,
            parent: None,
        }
    }

    pub(crate) fn child_of(parent: usize, symbol: U) -> Self {
        Node {
            edges: SmallVec::new(),
            pattern: None,
            suffix_link: ROOT,
            dict_link: None,
            parent: Some((parent, symbol)),
        }
    }

    /// Look up the outgoing edge labeled `symbol` in the frozen edge list.
    ///
    /// Linear search for small edge counts (cache-friendly), binary search
    /// above that; edges are sorted by label when the builder freezes them.
    pub(crate) fn child(&self, symbol: U) -> Option<usize> {
        if self.edges.len() < 16 {
            self.edges
                .iter()
                .find(|(label, _)| *label == symbol)
                .map(|(_, idx)| *idx)
        } else {
            self.edges
                .binary_search_by_key(&symbol, |(label, _)| *label)
                .ok()
                .map(|pos| self.edges[pos].1)
        }
    }
}
