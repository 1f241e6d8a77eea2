//! Dictionary abstractions for fuzzy matching.
//!
//! This module provides the traits that connect dictionary storage with the
//! bounded search procedures in [`crate::search`], along with the
//! code-point trie that implements them.

pub mod shared;
pub mod term;
pub mod trie;

use term::TermText;

/// Core dictionary abstraction for approximate string matching.
///
/// A dictionary represents a collection of terms that can be traversed
/// code point by code point via graph-like nodes. Search procedures only see
/// the nodes, so any backend exposing [`DictionaryNode`] can be searched.
pub trait Dictionary {
    /// The node type used for dictionary traversal
    type Node<'a>: DictionaryNode
    where
        Self: 'a;

    /// Get the root node of the dictionary
    fn root(&self) -> Self::Node<'_>;

    /// Check if a term exists in the dictionary.
    ///
    /// The walk stops as soon as a node's bound length shows that no term
    /// below it is long enough to hold the rest of the query. A query that is
    /// a strict prefix of an indexed term is not contained.
    fn contains<T: TermText + ?Sized>(&self, term: &T) -> bool {
        let term = term.decode();
        let mut remaining = term.chars().count();
        let mut node = self.root();

        for label in term.chars() {
            if node.bound_length() < remaining {
                return false;
            }
            match node.transition(label) {
                Some(next) => node = next,
                None => return false,
            }
            remaining -= 1;
        }

        node.word() == Some(&*term)
    }

    /// Get the total number of distinct terms
    fn len(&self) -> usize;

    /// Check if the dictionary is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Traversable dictionary node.
///
/// Nodes form a tree, where edges are labeled with code points and terminal
/// nodes carry the complete term that ends there.
pub trait DictionaryNode: Clone {
    /// The complete term ending at this node, if any
    fn word(&self) -> Option<&str>;

    /// Longest number of code points from this node to the end of any term
    /// passing through it.
    fn bound_length(&self) -> usize;

    /// Transition to a child node via the given code point
    ///
    /// Returns `None` if no such transition exists
    fn transition(&self, label: char) -> Option<Self>;

    /// Iterate over all outgoing edges as (code point, child_node) pairs
    fn edges(&self) -> Box<dyn Iterator<Item = (char, Self)> + '_>;

    /// Get the number of outgoing edges
    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
