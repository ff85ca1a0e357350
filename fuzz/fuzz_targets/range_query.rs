// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target comparing tree range queries against a linear scan.
//!
//! Pruning must never lose a word: every non-root word inside the window is
//! reported exactly as often as it was inserted, and nothing outside it.

#![no_main]

use arbitrary::Arbitrary;
use bkvocab::{distance, BkTree, QueryWindow};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct QueryInput {
    words: Vec<String>,
    query: String,
    max: u8,
    min: u8,
}

fuzz_target!(|input: QueryInput| {
    let words: Vec<String> = input
        .words
        .iter()
        .take(64)
        .map(|w| w.chars().take(16).collect())
        .collect();
    let query: String = input.query.chars().take(16).collect();

    let (min, max) = (usize::from(input.min % 8), usize::from(input.max % 8));
    let Ok(window) = QueryWindow::new(min, max) else {
        return;
    };

    let tree = BkTree::from_words(words.iter().cloned());
    let mut found = tree.query_window(&query, window);

    // Root is never a candidate
    let mut expected: Vec<&str> = words
        .iter()
        .skip(1)
        .filter(|w| window.contains(distance(&query, w)))
        .map(String::as_str)
        .collect();

    found.sort_unstable();
    expected.sort_unstable();
    assert_eq!(found, expected, "query={:?} window={:?}", query, window);
});
