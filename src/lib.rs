//! # levtrie
//!
//! Fuzzy string matching against a dictionary held in a code-point trie.
//!
//! The index answers exact membership queries and "which indexed words lie
//! within edit distance D of this query" queries, reporting each match's exact
//! Levenshtein distance. Distances are counted in Unicode code points, so a
//! multi-byte symbol costs one edit. Typical use is checking a candidate
//! string, such as a password or a misspelling, against a large denylist while
//! tolerating typos.
//!
//! Every trie node records the length of the longest term tail below it; the
//! bounded search uses it to prune branches that cannot reach a term within
//! the remaining edit budget.
//!
//! ## Example
//!
//! ```rust
//! use levtrie::prelude::*;
//!
//! let mut trie = FuzzyTrie::new();
//! trie.insert("Crème fraîche");
//! trie.insert("👻💩💩👻");
//!
//! let matches = trie.fuzzy_match("Creme fraîche", 2);
//! assert_eq!(matches.get("Crème fraîche"), Some(&1));
//!
//! let matches = trie.fuzzy_match("👻💩💩💩👻", 2);
//! assert_eq!(matches.get("👻💩💩👻"), Some(&1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod corpus;
pub mod dictionary;
pub mod distance;
pub mod search;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::corpus::{CorpusError, LoadStats};
    pub use crate::dictionary::shared::SharedFuzzyTrie;
    pub use crate::dictionary::term::TermText;
    pub use crate::dictionary::trie::FuzzyTrie;
    pub use crate::dictionary::{Dictionary, DictionaryNode};
    pub use crate::distance::standard_distance;
    pub use crate::search::{Algorithm, Candidate, Matches};
}
