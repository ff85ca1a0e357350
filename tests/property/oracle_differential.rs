//! Differential tests: pruned BK-tree queries against a linear scan.
//!
//! If the pruning window ever cut a subtree holding a match, the tree would
//! return fewer words than the scan. Results are compared as multisets; the
//! traversal order is checked separately in the unit tests.

use proptest::prelude::*;

use bkvocab::{query_batch, BkTree, QueryWindow};

use crate::common::sorted;
use crate::oracles::{oracle_range_query, vocabulary_strategy, window_strategy, word_strategy};

proptest! {
    /// Property: query returns exactly the in-window non-root words
    #[test]
    fn prop_query_matches_linear_scan(
        words in vocabulary_strategy(),
        query in word_strategy(),
        window in window_strategy(),
    ) {
        let tree = BkTree::from_words(words.iter().cloned());
        let actual = sorted(tree.query_window(&query, window));
        let expected = sorted(oracle_range_query(&words, &query, window));
        prop_assert_eq!(actual, expected);
    }

    /// Property: querying with a stored word finds every other copy of it
    #[test]
    fn prop_stored_word_finds_its_duplicates(
        words in vocabulary_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!words.is_empty());
        let tree = BkTree::from_words(words.iter().cloned());
        let target = &words[pick.index(words.len())];
        let exact = tree.query_window(target, QueryWindow::up_to(0));
        let copies = words.iter().skip(1).filter(|w| *w == target).count();
        prop_assert_eq!(exact.len(), copies);
    }

    /// Property: a stricter window returns a subset
    #[test]
    fn prop_narrower_window_is_subset(
        words in vocabulary_strategy(),
        query in word_strategy(),
        max in 0usize..4,
    ) {
        let tree = BkTree::from_words(words.iter().cloned());
        let wide = tree.query_window(&query, QueryWindow::up_to(max + 1));
        let narrow = tree.query_window(&query, QueryWindow::up_to(max));
        for word in &narrow {
            prop_assert!(wide.contains(word));
        }
        prop_assert!(narrow.len() <= wide.len());
    }

    /// Property: batch results equal one query at a time
    #[test]
    fn prop_batch_matches_single(
        words in vocabulary_strategy(),
        queries in prop::collection::vec(word_strategy(), 0..8),
        window in window_strategy(),
    ) {
        let tree = BkTree::from_words(words.iter().cloned());
        let batch = query_batch(&tree, &queries, window);
        prop_assert_eq!(batch.len(), queries.len());
        for (query, result) in queries.iter().zip(batch) {
            prop_assert_eq!(result, tree.query_window(query, window));
        }
    }
}
