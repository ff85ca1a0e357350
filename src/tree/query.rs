// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Range queries with triangle-inequality pruning.
//!
//! At a node whose word sits at distance `dis` from the query, a child hung
//! on edge key `k` roots a subtree of words that are all exactly `k` away from
//! the node. The triangle inequality puts every one of them at least
//! `|dis - k|` away from the query, so only keys in
//! `[dis - max, dis + max]` can lead anywhere. Everything else is skipped
//! without evaluating the metric.
//!
//! The traversal only ever tests children. The word the search starts at (the
//! tree root) is never compared against the window and never returned.
//!
//! An explicit stack replaces recursion. Popping a node reports it and pushes
//! its in-window children in descending key order, which yields the same
//! pre-order, ascending-key sequence the recursive form produces.

use serde::Serialize;

use super::node::Node;
use crate::error::QueryError;
use crate::fuzzy::Metric;

/// A validated `[min, max]` distance window, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QueryWindow {
    min: usize,
    max: usize,
}

impl QueryWindow {
    /// Window `[min, max]`. Fails when `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, QueryError> {
        if min > max {
            return Err(QueryError::InvertedWindow { min, max });
        }
        Ok(Self { min, max })
    }

    /// Window `[0, max]`.
    pub fn up_to(max: usize) -> Self {
        Self { min: 0, max }
    }

    /// Window from signed bounds, for front ends that parse untrusted numbers.
    pub fn from_signed(min: i64, max: i64) -> Result<Self, QueryError> {
        let max = non_negative("maximum", max)?;
        let min = non_negative("minimum", min)?;
        Self::new(min, max)
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    #[inline]
    pub fn contains(&self, distance: usize) -> bool {
        self.min <= distance && distance <= self.max
    }
}

fn non_negative(which: &'static str, value: i64) -> Result<usize, QueryError> {
    if value < 0 {
        return Err(QueryError::NegativeDistance { which, value });
    }
    // Anything past usize::MAX is wider than any possible distance
    Ok(usize::try_from(value).unwrap_or(usize::MAX))
}

/// Counters describing how much work a query did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueryStats {
    /// Metric evaluations, the root included.
    pub evaluated: usize,
    /// Child subtrees skipped because their edge key fell outside the window.
    pub pruned: usize,
    /// Words returned.
    pub matched: usize,
}

pub(crate) struct RangeQuery<'q, M> {
    pub(crate) metric: &'q M,
    pub(crate) query: &'q str,
    pub(crate) window: QueryWindow,
}

impl<M: Metric> RangeQuery<'_, M> {
    pub(crate) fn run<'t>(&self, root: &'t Node) -> (Vec<&'t str>, QueryStats) {
        let mut matches = Vec::new();
        let mut stats = QueryStats::default();
        let mut pending: Vec<(&'t Node, usize)> = Vec::new();

        stats.evaluated += 1;
        let root_distance = self.metric.distance(self.query, &root.word);
        self.push_children(root, root_distance, &mut pending, &mut stats);

        while let Some((node, dist)) = pending.pop() {
            if self.window.contains(dist) {
                matches.push(node.word.as_str());
            }
            self.push_children(node, dist, &mut pending, &mut stats);
        }

        stats.matched = matches.len();
        (matches, stats)
    }

    fn push_children<'t>(
        &self,
        node: &'t Node,
        dist: usize,
        pending: &mut Vec<(&'t Node, usize)>,
        stats: &mut QueryStats,
    ) {
        let low = dist.saturating_sub(self.window.max);
        let high = dist.saturating_add(self.window.max);

        let mut reachable = 0;
        for child in node.children.range(low..=high).rev().map(|(_, child)| &**child) {
            stats.evaluated += 1;
            reachable += 1;
            pending.push((child, self.metric.distance(self.query, &child.word)));
        }
        stats.pruned += node.children.len() - reachable;
    }
}
