//! Reader/writer-locked fuzzy index for concurrent mutation.
//!
//! [`FuzzyTrie`] itself relies on `&mut self` for insertion. When several
//! threads need to insert while others search, share a [`SharedFuzzyTrie`]
//! instead: clones point at the same index, insertions take the write lock
//! and lookups take the read lock.

use crate::corpus::{self, LoadStats};
use crate::dictionary::term::TermText;
use crate::dictionary::trie::FuzzyTrie;
use crate::search::{Algorithm, Candidate, Matches};
use parking_lot::{RwLock, RwLockReadGuard};
use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

/// A [`FuzzyTrie`] behind `Arc<RwLock<...>>`.
///
/// Safe for concurrent reads, exclusive writes.
///
/// # Examples
///
/// ```rust
/// use levtrie::prelude::*;
/// use std::thread;
///
/// let shared = SharedFuzzyTrie::new();
/// let writer = shared.clone();
/// thread::spawn(move || writer.insert("hello")).join().unwrap();
///
/// assert!(shared.contains("hello"));
/// assert_eq!(shared.fuzzy_match("helo", 1).get("hello"), Some(&1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedFuzzyTrie {
    inner: Arc<RwLock<FuzzyTrie>>,
}

impl SharedFuzzyTrie {
    /// Create an empty shared index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a shared index from an iterator of terms.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: TermText,
    {
        FuzzyTrie::from_terms(terms).into()
    }

    /// Insert a term, returning `true` if it was not indexed before.
    pub fn insert<T: TermText + ?Sized>(&self, term: &T) -> bool {
        self.inner.write().insert(term)
    }

    /// Insert many terms under a single write lock.
    pub fn extend<I, S>(&self, terms: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: TermText,
    {
        self.inner.write().extend(terms)
    }

    /// Check whether `term` is indexed exactly.
    pub fn contains<T: TermText + ?Sized>(&self, term: &T) -> bool {
        self.inner.read().contains(term)
    }

    /// Find every indexed term within `max_distance` edits of `query`.
    pub fn fuzzy_match<T: TermText + ?Sized>(&self, query: &T, max_distance: usize) -> Matches {
        self.inner.read().fuzzy_match(query, max_distance)
    }

    /// Like [`fuzzy_match`](Self::fuzzy_match), with an explicit search strategy.
    pub fn fuzzy_match_with<T: TermText + ?Sized>(
        &self,
        query: &T,
        max_distance: usize,
        algorithm: Algorithm,
    ) -> Matches {
        self.inner.read().fuzzy_match_with(query, max_distance, algorithm)
    }

    /// Merge the matches for `query` into an existing accumulator.
    pub fn fuzzy_match_into<T: TermText + ?Sized>(
        &self,
        matches: &mut Matches,
        query: &T,
        max_distance: usize,
    ) {
        self.inner.read().fuzzy_match_into(matches, query, max_distance)
    }

    /// Matches for `query`, sorted by distance then term.
    pub fn candidates<T: TermText + ?Sized>(&self, query: &T, max_distance: usize) -> Vec<Candidate> {
        self.inner.read().candidates(query, max_distance)
    }

    /// Load a corpus from a reader, taking the write lock once per line.
    ///
    /// Searches can interleave with a long load.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> corpus::Result<LoadStats> {
        corpus::read_lines(reader, None, |line| self.insert(line))
    }

    /// Load a corpus file, taking the write lock once per line.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> corpus::Result<LoadStats> {
        let path = path.as_ref();
        let reader = corpus::open(path)?;
        corpus::read_lines(reader, Some(path), |line| self.insert(line))
    }

    /// Acquire the read lock for several operations in a row.
    pub fn read(&self) -> RwLockReadGuard<'_, FuzzyTrie> {
        self.inner.read()
    }

    /// Get the number of distinct indexed terms.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if no term has been indexed.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Take the index back, if this is the last handle to it.
    pub fn try_unwrap(self) -> Result<FuzzyTrie, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| SharedFuzzyTrie { inner })
    }
}

impl From<FuzzyTrie> for SharedFuzzyTrie {
    fn from(trie: FuzzyTrie) -> Self {
        SharedFuzzyTrie {
            inner: Arc::new(RwLock::new(trie)),
        }
    }
}
