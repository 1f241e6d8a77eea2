//! Branch-and-bound search driven by an explicit stack.
//!
//! Explores exactly the same states as the recursive strategy; a state is a
//! node, the offset of the unconsumed query suffix, and the distance spent.

use super::{record, within_reach, Matches};
use crate::dictionary::DictionaryNode;

struct Pending<N> {
    node: N,
    offset: usize,
    distance: usize,
}

pub(super) fn search<N: DictionaryNode>(
    matches: &mut Matches,
    root: N,
    query: &[char],
    max_distance: usize,
) {
    let mut stack = vec![Pending {
        node: root,
        offset: 0,
        distance: 0,
    }];

    while let Some(Pending {
        node,
        offset,
        distance,
    }) = stack.pop()
    {
        let suffix = &query[offset..];
        let Some(&first) = suffix.first() else {
            if let Some(word) = node.word() {
                record(matches, word, distance);
            }
            if distance < max_distance {
                stack.extend(node.edges().map(|(_, child)| Pending {
                    node: child,
                    offset,
                    distance: distance + 1,
                }));
            }
            continue;
        };

        let remaining_budget = max_distance - distance;
        if !within_reach(node.bound_length(), suffix.len(), remaining_budget) {
            continue;
        }

        if remaining_budget > 0 {
            stack.push(Pending {
                node: node.clone(),
                offset: offset + 1,
                distance: distance + 1,
            });

            for (label, child) in node.edges() {
                if label != first {
                    stack.push(Pending {
                        node: child.clone(),
                        offset: offset + 1,
                        distance: distance + 1,
                    });
                }
                stack.push(Pending {
                    node: child,
                    offset,
                    distance: distance + 1,
                });
            }
        }

        // Pushed last so the free advance is explored first
        if let Some(child) = node.transition(first) {
            stack.push(Pending {
                node: child,
                offset: offset + 1,
                distance,
            });
        }
    }
}
