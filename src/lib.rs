//! # libahocorasick
//!
//! Multi-pattern exact string matching using the Aho-Corasick automaton,
//! based on the algorithm described in:
//!
//! > Aho, Alfred V., and Margaret J. Corasick. "Efficient string matching:
//! > an aid to bibliographic search." Communications of the ACM 18.6
//! > (1975): 333-340.
//!
//! Given a dictionary of pattern strings, the automaton finds every
//! occurrence of every pattern in an input text in a single linear pass,
//! reporting the end offset of each match.
//!
//! ## Example
//!
//! ```rust,ignore
//! use libahocorasick::prelude::*;
//!
//! let ac = AhoCorasick::build(["he", "she", "his", "hers"])?;
//! let matches = ac.scan("ushers");
//!
//! for (pattern, offsets) in matches.iter() {
//!     println!("pattern {pattern} ends at {offsets:?}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod automaton;
pub mod scanner;
pub mod symbol;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::automaton::builder::{AhoCorasickBuilder, BuildError};
    pub use crate::automaton::{AhoCorasick, StateId};
    pub use crate::scanner::{MatchTable, Scanner};
    pub use crate::symbol::Symbol;
}
