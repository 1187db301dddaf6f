//! Scanning text against a frozen automaton.
//!
//! [`Scanner`] drives the automaton over input one symbol at a time and
//! records, for every pattern, the end offset of each occurrence. This is
//! a Mealy-style traversal: output may be emitted on every transition, and
//! there is no accepting state, so scanning runs for the full input and
//! can resume afterwards with more input.

use crate::automaton::{AhoCorasick, StateId};
use crate::symbol::Symbol;

/// Per-pattern match end offsets, indexed by 1-based pattern id.
///
/// Offsets are 0-based positions of the last matched symbol unit and are
/// strictly increasing within each pattern's list. Patterns that never
/// matched have an empty list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchTable {
    offsets: Vec<Vec<usize>>,
}

impl MatchTable {
    pub(crate) fn with_patterns(pattern_count: u32) -> Self {
        MatchTable {
            offsets: vec![Vec::new(); pattern_count as usize],
        }
    }

    /// End offsets recorded for `pattern`.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is 0 or exceeds the dictionary size.
    pub fn offsets(&self, pattern: u32) -> &[usize] {
        &self.offsets[(pattern - 1) as usize]
    }

    /// Number of patterns the table covers (matched or not).
    pub fn pattern_count(&self) -> usize {
        self.offsets.len()
    }

    /// Total number of recorded matches across all patterns.
    pub fn match_count(&self) -> usize {
        self.offsets.iter().map(Vec::len).sum()
    }

    /// True if no pattern matched anywhere.
    pub fn is_empty(&self) -> bool {
        self.offsets.iter().all(Vec::is_empty)
    }

    /// Iterate over `(pattern_id, offsets)` pairs in pattern-id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[usize])> {
        self.offsets
            .iter()
            .enumerate()
            .map(|(i, list)| (i as u32 + 1, list.as_slice()))
    }

    fn record(&mut self, pattern: u32, end_offset: usize) {
        self.offsets[(pattern - 1) as usize].push(end_offset);
    }
}

/// A resumable scan over one logical input.
///
/// The scanner's only mutable state is the current [`StateId`] cursor and
/// the running position counter, so input may arrive in arbitrary chunks:
/// feeding `"ab"` then `"c"` produces exactly the same table as feeding
/// `"abc"` once.
///
/// # Example
///
/// ```rust,ignore
/// let ac: AhoCorasick = AhoCorasick::build(["bc"])?;
/// let mut scanner = Scanner::new(&ac);
/// scanner.feed("ab");
/// scanner.feed("c");
/// assert_eq!(scanner.finish().offsets(1), &[2]);
/// ```
pub struct Scanner<'a, U: Symbol = char> {
    automaton: &'a AhoCorasick<U>,
    state: StateId,
    position: usize,
    table: MatchTable,
}

impl<'a, U: Symbol> Scanner<'a, U> {
    /// Start a scan at the automaton's root.
    pub fn new(automaton: &'a AhoCorasick<U>) -> Self {
        Scanner {
            automaton,
            state: automaton.root(),
            position: 0,
            table: MatchTable::with_patterns(automaton.pattern_count()),
        }
    }

    /// Consume the next chunk of input.
    pub fn feed(&mut self, chunk: &str) {
        for unit in U::iter_str(chunk) {
            self.state = self.automaton.transition(self.state, unit);
            self.emit();
            self.position += 1;
        }
    }

    /// The current state cursor.
    pub fn state(&self) -> StateId {
        self.state
    }

    /// Number of symbol units consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// End the scan and take the accumulated match table.
    pub fn finish(self) -> MatchTable {
        self.table
    }

    /// Record every pattern ending at the current position: the state's
    /// own terminal first, then each terminal reachable along the
    /// dictionary suffix chain. The chain walk is a loop; its length is
    /// bounded by trie depth.
    fn emit(&mut self) {
        if let Some(pattern) = self.automaton.pattern_at(self.state) {
            self.table.record(pattern, self.position);
        }
        let mut link = self.automaton.dict_suffix_of(self.state);
        while let Some(state) = link {
            if let Some(pattern) = self.automaton.pattern_at(state) {
                self.table.record(pattern, self.position);
            }
            link = self.automaton.dict_suffix_of(state);
        }
    }
}
