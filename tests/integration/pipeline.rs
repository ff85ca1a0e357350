//! Vocabulary → tree → queries, end to end.

use std::fs;

use bkvocab::{query_batch, BkTree, QueryWindow, Vocabulary};
use tempfile::tempdir;

use crate::common::{sorted, DEMO_WORDS, UNICODE_WORDS};

fn tree_from_file(contents: &str) -> BkTree {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vocab.txt");
    fs::write(&path, contents).unwrap();
    BkTree::from_words(Vocabulary::load(&path).unwrap())
}

#[test]
fn test_file_to_query() {
    let tree = tree_from_file(&DEMO_WORDS.join("\n"));
    assert_eq!(tree.query("fame", 2, 2).unwrap(), vec!["gate", "home"]);
}

#[test]
fn test_empty_file_to_query() {
    let tree = tree_from_file("");
    assert!(tree.query("fame", 3, 0).unwrap().is_empty());
}

#[test]
fn test_batch_over_loaded_vocabulary() {
    let tree = tree_from_file(&DEMO_WORDS.join("\n"));
    let queries = Vocabulary::from_lines("fame\ngam\nxyz\n").into_words();
    let results = query_batch(&tree, &queries, QueryWindow::up_to(1));
    assert_eq!(
        results,
        vec![
            vec!["fame", "same", "ame", "frame"],
            vec!["gay"],
            Vec::new(),
        ]
    );
}

#[test]
fn test_unicode_vocabulary() {
    let tree = BkTree::from_words(UNICODE_WORDS);
    // Root "café" excluded; "cafe" is one substitution away
    assert_eq!(tree.query("café", 1, 0).unwrap(), vec!["cafe"]);
    assert_eq!(sorted(tree.query("naive", 1, 1).unwrap()), vec!["naïve"]);
    assert_eq!(sorted(tree.query("東都", 1, 0).unwrap()), vec!["京都", "東京"]);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_normalization_merges_decomposed_forms() {
    let decomposed = Vocabulary::from_lines("root\ncafe\u{301}\n");
    let raw = BkTree::from_words(decomposed.clone());
    assert!(raw.query("caf\u{e9}", 0, 0).unwrap().is_empty());

    let normalized = BkTree::from_words(decomposed.normalized());
    assert_eq!(
        normalized.query(&bkvocab::normalize("caf\u{e9}"), 0, 0).unwrap(),
        vec!["caf\u{e9}"]
    );
}
