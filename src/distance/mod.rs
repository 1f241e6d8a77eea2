//! Reference Levenshtein distance.
//!
//! Direct distance computation between two terms using space-optimized
//! dynamic programming (two rows) over Unicode code points. This is the
//! oracle the trie search is checked against, and the baseline for linear
//! scans over small word lists.

use crate::dictionary::term::{CodePoints, TermText};

/// Strip common prefix and suffix from two code-point sequences.
///
/// Returns the remaining middle parts. Shared affixes never contribute to the
/// distance, so removing them first shrinks the DP table.
#[inline]
pub(crate) fn strip_common_affixes<'a>(a: &'a [char], b: &'a [char]) -> (&'a [char], &'a [char]) {
    let prefix_len = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let (a, b) = (&a[prefix_len..], &b[prefix_len..]);

    let suffix_len = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();

    (&a[..a.len() - suffix_len], &b[..b.len() - suffix_len])
}

/// Compute standard Levenshtein distance between two terms.
///
/// The minimum number of single code point insertions, deletions and
/// substitutions required to transform `source` into `target`. Byte input is
/// decoded with the replacement character policy first.
///
/// # Example
///
/// ```rust
/// use levtrie::distance::standard_distance;
///
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// assert_eq!(standard_distance("test", "test"), 0);
/// assert_eq!(standard_distance("👻💩💩👻", "👻💩💩💩👻"), 1);
/// ```
pub fn standard_distance<A, B>(source: &A, target: &B) -> usize
where
    A: TermText + ?Sized,
    B: TermText + ?Sized,
{
    let source_chars: CodePoints = source.code_points();
    let target_chars: CodePoints = target.code_points();
    distance_chars(&source_chars, &target_chars)
}

/// Compute Levenshtein distance if it does not exceed `max_distance`.
///
/// Stops as soon as every cell of a DP row exceeds the bound, which makes
/// scanning a word list for close matches much cheaper than computing full
/// distances.
///
/// # Example
///
/// ```rust
/// use levtrie::distance::bounded_distance;
///
/// assert_eq!(bounded_distance("password", "passw0rd", 1), Some(1));
/// assert_eq!(bounded_distance("password", "drowssap", 2), None);
/// ```
pub fn bounded_distance<A, B>(source: &A, target: &B, max_distance: usize) -> Option<usize>
where
    A: TermText + ?Sized,
    B: TermText + ?Sized,
{
    let source_chars: CodePoints = source.code_points();
    let target_chars: CodePoints = target.code_points();
    let (s, t) = strip_common_affixes(&source_chars, &target_chars);

    if s.len().abs_diff(t.len()) > max_distance {
        return None;
    }

    let distance = dp_rows(s, t, Some(max_distance))?;
    (distance <= max_distance).then_some(distance)
}

fn distance_chars(source: &[char], target: &[char]) -> usize {
    let (s, t) = strip_common_affixes(source, target);
    // Without a bound the DP always completes
    dp_rows(s, t, None).unwrap_or_else(|| s.len().max(t.len()))
}

/// Two-row DP. Returns `None` once a whole row exceeds `bound`.
fn dp_rows(source: &[char], target: &[char], bound: Option<usize>) -> Option<usize> {
    let m = source.len();
    let n = target.len();

    // Handle edge cases
    if m == 0 {
        return Some(n);
    }
    if n == 0 {
        return Some(m);
    }

    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;
        let mut row_min = i;

        for j in 1..=n {
            let cost = usize::from(source[i - 1] != target[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
            row_min = row_min.min(curr_row[j]);
        }

        if bound.is_some_and(|max| row_min > max) {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    Some(prev_row[n])
}
