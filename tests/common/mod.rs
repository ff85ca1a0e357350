//! Shared test utilities and fixtures.

#![allow(dead_code)]

use bkvocab::{BkTree, Edge};

// ============================================================================
// VOCABULARIES
// ============================================================================

/// Inserted in this order these four words form a single chain:
/// `cat -1-> cats -2-> cast -2-> bat`.
pub const CHAIN_WORDS: [&str; 4] = ["cat", "cats", "cast", "bat"];

/// Small vocabulary with a bushy tree (root `game`, six children).
pub const DEMO_WORDS: [&str; 13] = [
    "game", "fame", "same", "gate", "gain", "gay", "frame", "home", "aim", "acm", "ame", "fell",
    "fbcdg",
];

/// Unicode vocabulary mixing scripts and diacritics.
pub const UNICODE_WORDS: [&str; 8] = [
    "café", "cafe", "naïve", "naive", "über", "uber", "東京", "京都",
];

// ============================================================================
// BUILDERS
// ============================================================================

pub fn chain_tree() -> BkTree {
    BkTree::from_words(CHAIN_WORDS)
}

pub fn demo_tree() -> BkTree {
    BkTree::from_words(DEMO_WORDS)
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Edges as owned `(parent, key, child)` triples, in traversal order.
pub fn edge_triples(tree: &BkTree) -> Vec<(String, usize, String)> {
    tree.edges()
        .map(|Edge { parent, distance, child, .. }| {
            (parent.to_string(), distance, child.to_string())
        })
        .collect()
}

/// Sort a result for multiset comparison.
pub fn sorted<'a>(mut words: Vec<&'a str>) -> Vec<&'a str> {
    words.sort_unstable();
    words
}

/// Check every edge key against the metric.
pub fn assert_edges_exact(tree: &BkTree) {
    for edge in tree.edges() {
        assert_eq!(
            bkvocab::distance(edge.parent, edge.child),
            edge.distance,
            "edge {:?} -> {:?} labeled {}",
            edge.parent,
            edge.child,
            edge.distance
        );
    }
}
