// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Many queries against one built tree.
//!
//! A built tree is only read, so queries are independent. With the `parallel`
//! feature they run on rayon's pool; without it, one after another. Either way
//! the output lines up with the input: `results[i]` answers `queries[i]`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::fuzzy::Metric;
use crate::tree::{BkTree, QueryWindow};

/// Run every query in `queries` over the same window.
#[cfg(feature = "parallel")]
pub fn query_batch<'t, M, Q>(
    tree: &'t BkTree<M>,
    queries: &[Q],
    window: QueryWindow,
) -> Vec<Vec<&'t str>>
where
    M: Metric + Sync,
    Q: AsRef<str> + Sync,
{
    debug!(queries = queries.len(), "running parallel batch");
    queries
        .par_iter()
        .map(|query| tree.query_window(query.as_ref(), window))
        .collect()
}

/// Run every query in `queries` over the same window.
#[cfg(not(feature = "parallel"))]
pub fn query_batch<'t, M, Q>(
    tree: &'t BkTree<M>,
    queries: &[Q],
    window: QueryWindow,
) -> Vec<Vec<&'t str>>
where
    M: Metric,
    Q: AsRef<str>,
{
    debug!(queries = queries.len(), "running sequential batch");
    queries
        .iter()
        .map(|query| tree.query_window(query.as_ref(), window))
        .collect()
}
