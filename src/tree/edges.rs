// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Depth-first walk over every edge in the tree, for debugging and display.

use std::collections::BTreeMap;

use serde::Serialize;

use super::node::Node;

/// One parent-to-child link. `distance` is the edge key, the exact metric
/// distance between the two words. `depth` is the child's depth (root is 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge<'t> {
    pub parent: &'t str,
    pub distance: usize,
    pub child: &'t str,
    pub depth: usize,
}

/// Pre-order iterator over edges, children in ascending key order.
///
/// Created by [`crate::BkTree::edges`].
#[derive(Debug, Clone)]
pub struct Edges<'t> {
    stack: Vec<(&'t Node, usize, &'t Node, usize)>,
}

impl<'t> Edges<'t> {
    pub(crate) fn new(root: Option<&'t Node>) -> Self {
        let mut edges = Self { stack: Vec::new() };
        if let Some(root) = root {
            edges.push_children(root, 1);
        }
        edges
    }

    fn push_children(&mut self, parent: &'t Node, depth: usize) {
        for (&key, child) in parent.children.iter().rev() {
            self.stack.push((parent, key, &**child, depth));
        }
    }
}

impl<'t> Iterator for Edges<'t> {
    type Item = Edge<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let (parent, distance, child, depth) = self.stack.pop()?;
        self.push_children(child, depth + 1);
        Some(Edge {
            parent: &parent.word,
            distance,
            child: &child.word,
            depth,
        })
    }
}

/// Shape summary of a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    /// Stored words, duplicates included.
    pub len: usize,
    /// Nodes on the longest root-to-leaf path.
    pub height: usize,
    /// Most children under a single node.
    pub max_fanout: usize,
    /// Edge count per edge key.
    pub edge_histogram: BTreeMap<usize, usize>,
}

pub(crate) fn tree_stats(root: Option<&Node>) -> TreeStats {
    let mut stats = TreeStats::default();
    let Some(root) = root else {
        return stats;
    };

    let mut stack = vec![(root, 1usize)];
    while let Some((node, depth)) = stack.pop() {
        stats.len += 1;
        stats.height = stats.height.max(depth);
        stats.max_fanout = stats.max_fanout.max(node.children.len());
        for (&key, child) in &node.children {
            *stats.edge_histogram.entry(key).or_insert(0) += 1;
            stack.push((&**child, depth + 1));
        }
    }
    stats
}
