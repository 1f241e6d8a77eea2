//! Code-point trie with per-node pruning bounds.
//!
//! Every node stores, besides its outgoing edges, the length of the longest
//! term tail below it. Fuzzy search uses that bound to cut branches whose
//! length gap to the query already exceeds the remaining edit budget, and
//! exact lookup uses it to reject queries early.
//!
//! Nodes live in an arena owned by the [`FuzzyTrie`]; children are referenced
//! by index, so a parent exclusively owns its subtree and there are no
//! back-references. The arena only grows: there is no deletion.
//!
//! # Example
//!
//! ```rust
//! use levtrie::prelude::*;
//!
//! let mut trie = FuzzyTrie::new();
//! trie.insert("Prinzhorn");
//! trie.insert("prinzhorn");
//!
//! assert!(trie.contains("Prinzhorn"));
//! assert!(!trie.contains("Prinz"));
//!
//! let matches = trie.fuzzy_match("Prinzhorn", 2);
//! assert_eq!(matches.get("Prinzhorn"), Some(&0));
//! assert_eq!(matches.get("prinzhorn"), Some(&1));
//! ```

use crate::dictionary::term::TermText;
use crate::dictionary::{Dictionary, DictionaryNode};
use crate::search::{self, Algorithm, Candidate, Matches};
use smallvec::SmallVec;

/// Index of the root node in the arena.
const ROOT: usize = 0;

/// A single node of the trie.
#[derive(Clone, Debug, Default)]
pub(crate) struct TrieNode {
    // Sorted by label; most nodes have few children
    pub(crate) edges: SmallVec<[(char, usize); 4]>,
    pub(crate) bound_length: usize,
    pub(crate) word: Option<Box<str>>,
}

impl TrieNode {
    #[inline]
    fn child(&self, label: char) -> Option<usize> {
        // Linear scan is faster than binary search for short edge lists
        if self.edges.len() < 16 {
            self.edges
                .iter()
                .find(|(c, _)| *c == label)
                .map(|(_, idx)| *idx)
        } else {
            self.edges
                .binary_search_by_key(&label, |(c, _)| *c)
                .ok()
                .map(|i| self.edges[i].1)
        }
    }
}

/// A fuzzy string index over Unicode code points.
///
/// Supports insertion, exact membership and bounded Levenshtein search.
///
/// # Thread Safety
///
/// Not internally synchronized. Lookups and searches take `&self` and can run
/// from many threads at once; insertion takes `&mut self`. For concurrent
/// mutation wrap the index in a lock, or use
/// [`SharedFuzzyTrie`](crate::dictionary::shared::SharedFuzzyTrie).
///
/// # Performance
///
/// - Insertion: O(m) where m is the term length in code points
/// - Lookup: O(m)
/// - Fuzzy search: exponential in the edit budget in the worst case; keep it
///   small (1-3)
#[derive(Clone, Debug)]
pub struct FuzzyTrie {
    nodes: Vec<TrieNode>,
    term_count: usize,
}

impl FuzzyTrie {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Create an empty index with room for `nodes` nodes before reallocating.
    pub fn with_capacity(nodes: usize) -> Self {
        let mut arena = Vec::with_capacity(nodes.max(1));
        arena.push(TrieNode::default());
        FuzzyTrie {
            nodes: arena,
            term_count: 0,
        }
    }

    /// Build an index from an iterator of terms.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: TermText,
    {
        let mut trie = Self::new();
        trie.extend(terms);
        trie
    }

    /// Insert a term into the index.
    ///
    /// The term is walked code point by code point, creating missing nodes
    /// and raising the bound length of every visited node to the number of
    /// code points left at that node. Empty terms are ignored.
    ///
    /// Returns `true` if the term was not indexed before.
    pub fn insert<T: TermText + ?Sized>(&mut self, term: &T) -> bool {
        let term = term.decode();
        let chars = term.code_points();
        if chars.is_empty() {
            return false;
        }

        let mut node_idx = ROOT;
        for (i, &ch) in chars.iter().enumerate() {
            self.raise_bound(node_idx, chars.len() - i);
            node_idx = match self.nodes[node_idx].child(ch) {
                Some(child_idx) => child_idx,
                None => self.push_child(node_idx, ch),
            };
        }

        let node = &mut self.nodes[node_idx];
        if node.word.is_some() {
            return false;
        }
        node.word = Some(term.into_owned().into_boxed_str());
        self.term_count += 1;
        true
    }

    /// Insert many terms, returning how many were newly added.
    pub fn extend<I, S>(&mut self, terms: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: TermText,
    {
        terms
            .into_iter()
            .filter(|term| self.insert(term))
            .count()
    }

    /// Check whether `term` is indexed exactly.
    ///
    /// Comparison is by code point: case and diacritics matter.
    #[inline]
    pub fn contains<T: TermText + ?Sized>(&self, term: &T) -> bool {
        Dictionary::contains(self, term)
    }

    /// Find every indexed term within `max_distance` edits of `query`.
    ///
    /// Each match maps to its minimal Levenshtein distance, counted in code
    /// points with unit cost insertions, deletions and substitutions.
    ///
    /// Any budget is accepted, including `usize::MAX`. The default strategy
    /// recurses on the native stack; once the query length plus the longest
    /// indexed term exceeds [`search::RECURSION_LIMIT`] it switches to the
    /// work-stack strategy, so long queries cannot overflow the thread stack.
    pub fn fuzzy_match<T: TermText + ?Sized>(&self, query: &T, max_distance: usize) -> Matches {
        self.fuzzy_match_with(query, max_distance, Algorithm::default())
    }

    /// Like [`fuzzy_match`](Self::fuzzy_match), with an explicit search strategy.
    pub fn fuzzy_match_with<T: TermText + ?Sized>(
        &self,
        query: &T,
        max_distance: usize,
        algorithm: Algorithm,
    ) -> Matches {
        let mut matches = Matches::default();
        search::collect(&mut matches, self.root(), query, max_distance, algorithm);
        matches
    }

    /// Merge the matches for `query` into an existing accumulator.
    ///
    /// A term already present keeps the smaller of its recorded distance and
    /// the newly found one.
    pub fn fuzzy_match_into<T: TermText + ?Sized>(
        &self,
        matches: &mut Matches,
        query: &T,
        max_distance: usize,
    ) {
        search::collect(matches, self.root(), query, max_distance, Algorithm::default());
    }

    /// Matches for `query`, sorted by distance then term.
    pub fn candidates<T: TermText + ?Sized>(&self, query: &T, max_distance: usize) -> Vec<Candidate> {
        search::into_candidates(self.fuzzy_match(query, max_distance))
    }

    /// Iterate over all indexed terms in code-point order.
    pub fn terms(&self) -> Terms<'_> {
        Terms {
            trie: self,
            stack: vec![ROOT],
        }
    }

    /// Get the number of distinct indexed terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.term_count
    }

    /// Check if no term has been indexed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count == 0
    }

    /// Get the number of nodes, including the root.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Length in code points of the longest indexed term.
    #[inline]
    pub fn max_term_length(&self) -> usize {
        self.nodes[ROOT].bound_length
    }

    #[inline]
    fn raise_bound(&mut self, node_idx: usize, remaining: usize) {
        let bound = &mut self.nodes[node_idx].bound_length;
        if *bound < remaining {
            *bound = remaining;
        }
    }

    /// Append a fresh child under `parent_idx`, keeping its edges sorted.
    fn push_child(&mut self, parent_idx: usize, label: char) -> usize {
        let child_idx = self.nodes.len();
        self.nodes.push(TrieNode::default());

        let edges = &mut self.nodes[parent_idx].edges;
        match edges.binary_search_by_key(&label, |(c, _)| *c) {
            Ok(pos) => edges[pos] = (label, child_idx),
            Err(pos) => edges.insert(pos, (label, child_idx)),
        }
        child_idx
    }

    #[cfg(test)]
    pub(crate) fn node(&self, idx: usize) -> &TrieNode {
        &self.nodes[idx]
    }
}

impl Default for FuzzyTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TermText> FromIterator<S> for FuzzyTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl<S: TermText> Extend<S> for FuzzyTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        FuzzyTrie::extend(self, iter);
    }
}

impl Dictionary for FuzzyTrie {
    type Node<'a> = TrieNodeRef<'a>
    where
        Self: 'a;

    fn root(&self) -> Self::Node<'_> {
        TrieNodeRef {
            trie: self,
            node_idx: ROOT,
        }
    }

    fn len(&self) -> usize {
        self.term_count
    }
}

/// Borrowed handle to a node of a [`FuzzyTrie`].
#[derive(Clone, Copy)]
pub struct TrieNodeRef<'a> {
    trie: &'a FuzzyTrie,
    node_idx: usize,
}

impl<'a> TrieNodeRef<'a> {
    #[inline]
    fn node(&self) -> &'a TrieNode {
        &self.trie.nodes[self.node_idx]
    }

    #[inline]
    fn at(&self, node_idx: usize) -> Self {
        TrieNodeRef {
            trie: self.trie,
            node_idx,
        }
    }
}

impl std::fmt::Debug for TrieNodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let node = self.node();
        f.debug_struct("TrieNodeRef")
            .field("node_idx", &self.node_idx)
            .field("bound_length", &node.bound_length)
            .field("word", &node.word)
            .field("edges", &node.edges.len())
            .finish()
    }
}

impl DictionaryNode for TrieNodeRef<'_> {
    #[inline]
    fn word(&self) -> Option<&str> {
        self.node().word.as_deref()
    }

    #[inline]
    fn bound_length(&self) -> usize {
        self.node().bound_length
    }

    #[inline]
    fn transition(&self, label: char) -> Option<Self> {
        self.node().child(label).map(|idx| self.at(idx))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (char, Self)> + '_> {
        Box::new(
            self.node()
                .edges
                .iter()
                .map(move |&(ch, idx)| (ch, self.at(idx))),
        )
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.node().edges.len()
    }
}

/// Iterator over the terms of a [`FuzzyTrie`], in code-point order.
pub struct Terms<'a> {
    trie: &'a FuzzyTrie,
    stack: Vec<usize>,
}

impl<'a> Iterator for Terms<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node_idx) = self.stack.pop() {
            let node = &self.trie.nodes[node_idx];
            // Reverse so the smallest label is visited first
            self.stack
                .extend(node.edges.iter().rev().map(|(_, child_idx)| *child_idx));
            if let Some(word) = node.word.as_deref() {
                return Some(word);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Check the bound-length invariant on every node, returning the longest
    /// tail below `node_idx`.
    fn check_bounds(trie: &FuzzyTrie, node_idx: usize) -> usize {
        let node = trie.node(node_idx);
        let mut longest = 0;
        for &(_, child_idx) in &node.edges {
            longest = longest.max(check_bounds(trie, child_idx) + 1);
        }
        assert_eq!(
            node.bound_length, longest,
            "node {} has bound {} but longest tail {}",
            node_idx, node.bound_length, longest
        );
        longest
    }

    #[test]
    fn test_insert_and_contains() {
        let mut trie = FuzzyTrie::new();
        assert!(trie.insert("Prinzhorn"));

        assert!(trie.contains("Prinzhorn"));
        assert!(!trie.contains("Prinz"));
        assert!(!trie.contains("horn"));
        assert!(!trie.contains("prinzhorn"));
        assert!(!trie.contains("Prinzhôrn"));
        assert!(!trie.contains("Prinzhorns"));
    }

    #[test]
    fn test_empty_term_is_ignored() {
        let mut trie = FuzzyTrie::new();
        assert!(!trie.insert(""));
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(!trie.contains(""));
        assert!(trie.node(ROOT).word.is_none());
    }

    #[test]
    fn test_reinsert_is_idempotent() {
        let mut trie = FuzzyTrie::new();
        assert!(trie.insert("test"));
        let nodes = trie.node_count();

        assert!(!trie.insert("test"));
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.len(), 1);
        assert!(trie.contains("test"));
    }

    #[test]
    fn test_shared_prefixes_share_nodes() {
        let trie = FuzzyTrie::from_terms(["test", "testing", "tested"]);
        // root + t,e,s,t + i,n,g + e,d
        assert_eq!(trie.node_count(), 10);
        assert_eq!(trie.len(), 3);
        assert!(trie.contains("test"));
        assert!(trie.contains("testing"));
        assert!(!trie.contains("testin"));
    }

    #[test]
    fn test_bound_lengths() {
        let trie = FuzzyTrie::from_terms(["a", "abcd", "b", "xyz", "abx"]);
        check_bounds(&trie, ROOT);
        assert_eq!(trie.max_term_length(), 4);

        let a = trie.root().transition('a').unwrap();
        assert_eq!(a.bound_length(), 3);
        assert_eq!(a.word(), Some("a"));

        let b = trie.root().transition('b').unwrap();
        assert_eq!(b.bound_length(), 0);
    }

    #[test]
    fn test_bounds_never_decrease() {
        let mut trie = FuzzyTrie::new();
        trie.insert("abcdef");
        trie.insert("ab");
        assert_eq!(trie.max_term_length(), 6);
        let ab = trie.root().transition('a').and_then(|n| n.transition('b')).unwrap();
        assert_eq!(ab.bound_length(), 4);
        check_bounds(&trie, ROOT);
    }

    #[test]
    fn test_multibyte_edges() {
        let trie = FuzzyTrie::from_terms(["👻💩💩👻", "Crème fraîche"]);
        check_bounds(&trie, ROOT);
        assert_eq!(trie.max_term_length(), 13);
        assert_eq!(trie.root().edge_count(), 2);
        assert!(trie.contains("👻💩💩👻"));
        assert!(!trie.contains("👻💩👻"));
    }

    #[test]
    fn test_many_children_stay_sorted() {
        let labels: Vec<String> = ('a'..='z').rev().map(|c| c.to_string()).collect();
        let trie = FuzzyTrie::from_terms(&labels);
        let edges: Vec<char> = trie.root().edges().map(|(c, _)| c).collect();
        let expected: Vec<char> = ('a'..='z').collect();
        assert_eq!(edges, expected);
        // Large edge lists use binary search
        assert!(trie.contains("q"));
        assert!(!trie.contains("Q"));
    }

    #[test]
    fn test_terms_in_order() {
        let trie = FuzzyTrie::from_terms(["banana", "apple", "app", "cherry", "band"]);
        let terms: Vec<&str> = trie.terms().collect();
        assert_eq!(terms, vec!["app", "apple", "banana", "band", "cherry"]);
    }

    #[test]
    fn test_extend_counts_new_terms() {
        let mut trie = FuzzyTrie::new();
        assert_eq!(trie.extend(["one", "two", "one", ""]), 2);
        let collected: FuzzyTrie = vec!["x", "y"].into_iter().collect();
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn test_invalid_bytes_are_indexed_lossily() {
        let mut trie = FuzzyTrie::new();
        assert!(trie.insert(&b"pass\xFFword"[..]));
        assert!(trie.contains("pass\u{FFFD}word"));
        assert!(trie.contains(b"pass\xFEword"));
        assert_eq!(trie.terms().next(), Some("pass\u{FFFD}word"));
    }
}
