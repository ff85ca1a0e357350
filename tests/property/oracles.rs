//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations. They serve as ground truth for
//! the row-compressed metric and the pruned tree traversal.

#![allow(dead_code)]

use proptest::prelude::*;

use bkvocab::QueryWindow;

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Levenshtein distance over the full `(|a|+1) × (|b|+1)` table.
pub fn oracle_levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for i in 0..=a.len() {
        dp[i][0] = i;
    }
    for j in 0..=b.len() {
        dp[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + dp[i - 1][j - 1].min(dp[i][j - 1]).min(dp[i - 1][j])
            };
        }
    }
    dp[a.len()][b.len()]
}

/// Linear scan matching the tree's contract: every inserted word except the
/// first (the root) whose distance falls inside the window.
pub fn oracle_range_query<'a>(
    words: &'a [String],
    query: &str,
    window: QueryWindow,
) -> Vec<&'a str> {
    words
        .iter()
        .skip(1)
        .filter(|word| window.contains(oracle_levenshtein(query, word)))
        .map(String::as_str)
        .collect()
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// Short words over a small alphabet, so distances collide and trees get deep.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,6}").unwrap()
}

/// Words drawn from a wider alphabet including multi-byte characters.
pub fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-dé日本🦀]{0,5}").unwrap()
}

pub fn vocabulary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..40)
}

pub fn window_strategy() -> impl Strategy<Value = QueryWindow> {
    (0usize..4, 0usize..4).prop_map(|(a, b)| {
        QueryWindow::new(a.min(b), a.max(b)).expect("ordered bounds")
    })
}

// =============================================================================
// ORACLE SELF-CHECKS
// =============================================================================

#[test]
fn test_oracle_known_values() {
    assert_eq!(oracle_levenshtein("kitten", "sitting"), 3);
    assert_eq!(oracle_levenshtein("", "abc"), 3);
    assert_eq!(oracle_levenshtein("cats", "cast"), 2);
}

#[test]
fn test_oracle_agrees_with_strsim() {
    for (a, b) in [("fame", "frame"), ("naïve", "naive"), ("東京", "京都"), ("", "")] {
        assert_eq!(oracle_levenshtein(a, b), strsim::levenshtein(a, b));
    }
}

#[test]
fn test_oracle_range_skips_root() {
    let words: Vec<String> = ["cat", "cats", "cast", "bat"].map(String::from).to_vec();
    assert_eq!(
        oracle_range_query(&words, "cat", QueryWindow::up_to(1)),
        vec!["cats", "cast", "bat"]
    );
}
