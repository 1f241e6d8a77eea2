//! Bounded Levenshtein search over dictionary nodes.
//!
//! A search walks the dictionary from the root while consuming the query one
//! code point at a time. Each step is either a free advance along the edge
//! labeled with the next query code point, or one of three unit-cost edits:
//!
//! - **Substitution**: follow any edge while consuming the next query code point
//! - **Insertion**: follow any edge without consuming the query
//! - **Deletion**: consume the next query code point without moving
//!
//! Once the query is exhausted, a terminal node is recorded with the distance
//! spent so far, and any remaining budget is spent on trailing insertions.
//! Every sequence of moves is a Levenshtein edit script, so exploring all of
//! them up to the budget and keeping the smallest distance per term yields the
//! exact Levenshtein distance of every term within the budget.
//!
//! Branches are pruned with the node's bound length: if even the longest term
//! tail below a node is shorter than the rest of the query by more than the
//! remaining budget, no term below can match.
//!
//! Two strategies drive the same moves: [`Algorithm::Recursive`] uses the
//! native call stack, and [`Algorithm::WorkStack`] keeps pending states in a
//! heap-allocated stack so deep searches cannot overflow the thread stack.

mod recursive;
mod work_stack;

use crate::dictionary::term::TermText;
use crate::dictionary::DictionaryNode;
use rustc_hash::FxHashMap;
use std::fmt;

/// Search results: matched term to its minimal edit distance.
pub type Matches = FxHashMap<String, usize>;

/// Search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum, serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    /// Depth-first recursion on the native call stack.
    ///
    /// Recursion depth grows with the query length and the longest indexed
    /// term. When their sum exceeds [`RECURSION_LIMIT`] the search runs on
    /// [`Algorithm::WorkStack`] instead, with identical results.
    #[default]
    Recursive,

    /// Depth-first traversal with an explicit stack of pending states.
    ///
    /// Native stack depth stays constant regardless of query length and
    /// budget.
    WorkStack,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Recursive => write!(f, "recursive"),
            Algorithm::WorkStack => write!(f, "work-stack"),
        }
    }
}

/// A matching term with its edit distance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Candidate {
    /// Edit distance from query
    pub distance: usize,
    /// The matching term
    pub term: String,
}

/// Convert matches into candidates sorted by distance, then term.
pub fn into_candidates(matches: Matches) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = matches
        .into_iter()
        .map(|(term, distance)| Candidate { distance, term })
        .collect();
    candidates.sort_unstable();
    candidates
}

/// Record `word` at `distance`, keeping the smaller distance if the word was
/// already recorded.
#[inline]
pub fn record(matches: &mut Matches, word: &str, distance: usize) {
    match matches.get_mut(word) {
        Some(known) => {
            if distance < *known {
                *known = distance;
            }
        }
        None => {
            matches.insert(word.to_owned(), distance);
        }
    }
}

/// Search the dictionary below `root` and merge the results into `matches`.
///
/// Terms already in `matches` keep the smaller of their recorded distance and
/// the one found by this search, so several queries can share one
/// accumulator.
pub fn collect<N, T>(matches: &mut Matches, root: N, query: &T, max_distance: usize, algorithm: Algorithm)
where
    N: DictionaryNode,
    T: TermText + ?Sized,
{
    let query = query.code_points();
    let before = matches.len();

    let algorithm = effective_algorithm(algorithm, query.len(), root.bound_length());
    match algorithm {
        Algorithm::Recursive => recursive::search(matches, root, &query, 0, max_distance),
        Algorithm::WorkStack => work_stack::search(matches, root, &query, max_distance),
    }

    tracing::trace!(
        query_len = query.len(),
        max_distance,
        %algorithm,
        new_matches = matches.len() - before,
        "fuzzy search finished"
    );
}

/// Deepest native recursion the recursive strategy is allowed to reach.
///
/// Recursion depth is bounded by the query length plus the longest term
/// below the root; above this limit the work-stack strategy runs instead.
pub const RECURSION_LIMIT: usize = 1024;

/// The strategy actually used for a query of `query_len` code points against
/// a dictionary whose longest term has `max_term_length` code points.
#[inline]
pub fn effective_algorithm(algorithm: Algorithm, query_len: usize, max_term_length: usize) -> Algorithm {
    match algorithm {
        Algorithm::Recursive if query_len.saturating_add(max_term_length) > RECURSION_LIMIT => {
            Algorithm::WorkStack
        }
        other => other,
    }
}

/// Search the dictionary below `root` for terms within `max_distance` of `query`.
pub fn fuzzy_match<N, T>(root: N, query: &T, max_distance: usize, algorithm: Algorithm) -> Matches
where
    N: DictionaryNode,
    T: TermText + ?Sized,
{
    let mut matches = Matches::default();
    collect(&mut matches, root, query, max_distance, algorithm);
    matches
}

/// Whether the subtree below a node with the given bound length can still
/// hold a term within budget of a query suffix of `suffix_len` code points.
///
/// The distance to any term tail of length `l` is at least
/// `suffix_len - l`, and every tail below the node is at most `bound_length`
/// long. No addition is involved, so any budget up to `usize::MAX` is valid.
#[inline]
pub(crate) fn within_reach(bound_length: usize, suffix_len: usize, remaining_budget: usize) -> bool {
    suffix_len.saturating_sub(bound_length) <= remaining_budget
}
