// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein edit distance over Unicode scalar values.
//!
//! The classic Wagner-Fischer table, kept to a single row. The row runs over
//! the shorter string, so memory is `O(min(|a|, |b|))` while the result is
//! identical to filling the whole `(|a|+1) × (|b|+1)` table.
//!
//! Every property the BK-tree leans on holds here:
//! - `distance(a, a) == 0`
//! - `distance(a, b) == distance(b, a)`
//! - `distance(a, c) <= distance(a, b) + distance(b, c)`
//! - `distance(a, b) >= |len(a) - len(b)|`

/// Minimum number of single-character insertions, deletions or substitutions
/// turning `a` into `b`.
///
/// Characters are compared as `char`s. A grapheme cluster built from several
/// code points (an accent written as a combining mark, most emoji sequences)
/// counts as several units. Normalize both sides first if that matters, see
/// [`crate::Vocabulary::normalized`].
///
/// ```
/// assert_eq!(bkvocab::distance("kitten", "sitting"), 3);
/// assert_eq!(bkvocab::distance("", "abc"), 3);
/// ```
pub fn distance(a: &str, b: &str) -> usize {
    // Use character counts, not byte lengths, for Unicode correctness
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    // row[j] holds dp[i][j] for the current i
    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, sc) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if lc == sc {
                diagonal
            } else {
                1 + diagonal.min(row[j]).min(above)
            };
            diagonal = above;
        }
    }

    row[short.len()]
}

/// A distance function the tree can be built over.
///
/// Implementations must be a metric: zero exactly on equal inputs, symmetric,
/// and satisfying the triangle inequality. Range queries prune subtrees on the
/// strength of that last property, so a non-metric silently loses matches.
pub trait Metric {
    fn distance(&self, a: &str, b: &str) -> usize;
}

/// Unit-cost Levenshtein distance, the default tree metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Metric for Levenshtein {
    #[inline]
    fn distance(&self, a: &str, b: &str) -> usize {
        distance(a, b)
    }
}

impl<F> Metric for F
where
    F: Fn(&str, &str) -> usize,
{
    #[inline]
    fn distance(&self, a: &str, b: &str) -> usize {
        self(a, b)
    }
}
