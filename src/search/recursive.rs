//! Recursive branch-and-bound search.

use super::{record, within_reach, Matches};
use crate::dictionary::DictionaryNode;

/// Explore every edit script from `node` for the query `suffix`, with
/// `distance` edits already spent.
pub(super) fn search<N: DictionaryNode>(
    matches: &mut Matches,
    node: N,
    suffix: &[char],
    distance: usize,
    max_distance: usize,
) {
    let Some((&first, rest)) = suffix.split_first() else {
        if let Some(word) = node.word() {
            record(matches, word, distance);
        }
        if distance < max_distance {
            // Trailing insertions
            for (_, child) in node.edges() {
                search(matches, child, suffix, distance + 1, max_distance);
            }
        }
        return;
    };

    let remaining_budget = max_distance - distance;
    if !within_reach(node.bound_length(), suffix.len(), remaining_budget) {
        return;
    }

    if let Some(child) = node.transition(first) {
        search(matches, child, rest, distance, max_distance);
    }

    if remaining_budget == 0 {
        return;
    }

    for (label, child) in node.edges() {
        if label != first {
            // Substitution
            search(matches, child.clone(), rest, distance + 1, max_distance);
        }
        // Insertion
        search(matches, child, suffix, distance + 1, max_distance);
    }

    // Deletion
    search(matches, node, rest, distance + 1, max_distance);
}
