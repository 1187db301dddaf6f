//! Symbol unit abstraction for automaton edges.
//!
//! This module provides the [`Symbol`] trait, which abstracts over byte-level
//! (u8) and character-level (char) operations. This allows automata to operate
//! at either granularity, trading performance for Unicode correctness.

/// Trait abstracting symbol unit types for automaton edges.
///
/// This trait allows automata to operate at byte-level ([`u8`]) for maximum
/// performance with ASCII/Latin-1 text, or character-level ([`char`]) for
/// proper Unicode support.
///
/// # Trade-offs
///
/// - **Byte-level (u8)**: 1 byte per edge label, fastest, but match offsets
///   count UTF-8 bytes, so a multi-byte character spans several positions.
///
/// - **Character-level (char)**: 4 bytes per edge label, slightly slower,
///   but match offsets count Unicode scalar values.
pub trait Symbol:
    Copy + Clone + Eq + Ord + std::hash::Hash + std::fmt::Debug + Send + Sync + 'static
{
    /// Convert from a string slice to a vector of units.
    ///
    /// For `u8`, this extracts the UTF-8 bytes.
    /// For `char`, this extracts the Unicode scalar values.
    fn from_str(s: &str) -> Vec<Self>;

    /// Create an iterator over the units in a string.
    ///
    /// For `u8`, iterates over bytes.
    /// For `char`, iterates over Unicode scalar values.
    fn iter_str(s: &str) -> Box<dyn Iterator<Item = Self> + '_>;
}

impl Symbol for u8 {
    fn from_str(s: &str) -> Vec<Self> {
        s.as_bytes().to_vec()
    }

    fn iter_str(s: &str) -> Box<dyn Iterator<Item = Self> + '_> {
        Box::new(s.bytes())
    }
}

impl Symbol for char {
    fn from_str(s: &str) -> Vec<Self> {
        s.chars().collect()
    }

    fn iter_str(s: &str) -> Box<dyn Iterator<Item = Self> + '_> {
        Box::new(s.chars())
    }
}
