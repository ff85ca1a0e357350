// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! BK-tree (Burkhard-Keller tree) over a vocabulary of words.
//!
//! Each node holds one word. Each edge is labeled with the exact distance
//! between its two words, and a node has at most one child per distance.
//! Insertion walks down from the root following the edge labeled with the new
//! word's distance to the current node, and hangs a leaf at the first free
//! label. Shape depends only on insertion order and the metric: no sorting, no
//! rebalancing, duplicates kept (they chain under key 0).
//!
//! # Root exclusion
//!
//! Range queries test the children of each visited node, never the node the
//! walk starts from. The root word therefore never appears in query results,
//! even when it matches the query exactly. Callers that need it can compare
//! against [`BkTree::root_word`] themselves.
//!
//! # Example
//!
//! ```
//! use bkvocab::BkTree;
//!
//! let tree = BkTree::from_words(["cat", "cats", "cast", "bat"]);
//! let matches = tree.query("cat", 1, 0).unwrap();
//! assert_eq!(matches, vec!["cats", "cast", "bat"]);
//! ```

mod edges;
mod node;
mod query;

use std::collections::btree_map::Entry;

use tracing::{debug, trace};

use crate::error::QueryError;
use crate::fuzzy::{Levenshtein, Metric};

pub use edges::{Edge, Edges, TreeStats};
pub use query::{QueryStats, QueryWindow};

use node::Node;
use query::RangeQuery;

/// Metric tree answering "which words lie within `[min, max]` edits of this
/// one" without scanning the whole vocabulary.
///
/// Construction takes `&mut self`; queries take `&self`, so a built tree can
/// be shared across threads and queried concurrently.
#[derive(Debug, Clone)]
pub struct BkTree<M = Levenshtein> {
    root: Option<Box<Node>>,
    words: Vec<String>,
    metric: M,
}

impl BkTree<Levenshtein> {
    /// Empty tree over Levenshtein distance.
    pub fn new() -> Self {
        Self::with_metric(Levenshtein)
    }

    /// Tree holding `words`, inserted in iteration order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tree = Self::new();
        tree.build(words);
        tree
    }
}

impl Default for BkTree<Levenshtein> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Metric> BkTree<M> {
    /// Empty tree over a custom metric.
    pub fn with_metric(metric: M) -> Self {
        Self {
            root: None,
            words: Vec::new(),
            metric,
        }
    }

    /// Replace the tree with one built from `words`, in order. The first word
    /// becomes the root. An empty sequence leaves the tree unchanged; use
    /// [`insert`](Self::insert) to grow an existing tree.
    pub fn build<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words = words.into_iter().peekable();
        if words.peek().is_none() {
            return;
        }

        self.root = None;
        self.words.clear();
        for word in words {
            self.insert(word);
        }
        debug!(words = self.len(), "built bk-tree");
    }

    /// Place one word by descending from the root.
    pub fn insert(&mut self, word: impl Into<String>) {
        let word = word.into();
        self.words.push(word.clone());

        let Some(mut node) = self.root.as_mut() else {
            trace!(word = %word, "inserted root");
            self.root = Some(Box::new(Node::leaf(word)));
            return;
        };

        let mut depth = 1;
        loop {
            let dist = self.metric.distance(&node.word, &word);
            match node.children.entry(dist) {
                Entry::Occupied(entry) => {
                    node = entry.into_mut();
                    depth += 1;
                }
                Entry::Vacant(entry) => {
                    trace!(word = %word, depth, distance = dist, "inserted word");
                    entry.insert(Box::new(Node::leaf(word)));
                    return;
                }
            }
        }
    }

    /// Words within `[min_dist, max_dist]` of `word`, root excluded.
    ///
    /// Fails with [`QueryError::InvertedWindow`] when `min_dist > max_dist`.
    /// Results come in pre-order with ascending edge keys, which is not
    /// distance order.
    pub fn query(
        &self,
        word: &str,
        max_dist: usize,
        min_dist: usize,
    ) -> Result<Vec<&str>, QueryError> {
        let window = QueryWindow::new(min_dist, max_dist)?;
        Ok(self.query_window(word, window))
    }

    /// Words inside `window` of `word`, root excluded.
    pub fn query_window(&self, word: &str, window: QueryWindow) -> Vec<&str> {
        let (matches, stats) = self.query_with_stats(word, window);
        debug!(
            query = word,
            min = window.min(),
            max = window.max(),
            matched = stats.matched,
            evaluated = stats.evaluated,
            pruned = stats.pruned,
            "bk-tree query"
        );
        matches
    }

    /// Like [`query_window`](Self::query_window), also reporting how much
    /// of the tree the pruning skipped.
    pub fn query_with_stats(&self, word: &str, window: QueryWindow) -> (Vec<&str>, QueryStats) {
        let Some(root) = self.root.as_deref() else {
            return (Vec::new(), QueryStats::default());
        };
        RangeQuery {
            metric: &self.metric,
            query: word,
            window,
        }
        .run(root)
    }

    /// Every parent-child link, depth-first, ascending keys.
    pub fn edges(&self) -> Edges<'_> {
        Edges::new(self.root.as_deref())
    }

    /// Shape summary: size, height, fanout, edges per key.
    pub fn stats(&self) -> TreeStats {
        edges::tree_stats(self.root.as_deref())
    }

    /// Nodes on the longest root-to-leaf path, 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.stats().height
    }

    pub fn root_word(&self) -> Option<&str> {
        self.root.as_deref().map(|root| root.word.as_str())
    }

    /// Every inserted word, in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }
}
