// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result rendering for each subcommand.
//!
//! Every function writes to the writer it is given and returns its errors, so
//! a closed pipe ends the command through the normal error path.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use bkvocab::{BkTree, Metric};

use super::display;

#[derive(Serialize)]
struct BatchEntry<'a> {
    query: &'a str,
    matches: &'a [&'a str],
}

/// One match per line, or a JSON array.
pub fn write_matches(out: &mut impl Write, matches: &[&str], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, matches)?;
        writeln!(out)?;
    } else {
        for word in matches {
            writeln!(out, "{}", word)?;
        }
    }
    Ok(())
}

/// `query: match match ...` per query, or a JSON array of
/// `{"query", "matches"}` objects in query order.
pub fn write_batch(
    out: &mut impl Write,
    queries: &[String],
    results: &[Vec<&str>],
    json: bool,
) -> Result<()> {
    if json {
        let entries: Vec<BatchEntry<'_>> = queries
            .iter()
            .zip(results)
            .map(|(query, matches)| BatchEntry { query, matches })
            .collect();
        serde_json::to_writer(&mut *out, &entries)?;
        writeln!(out)?;
    } else {
        for (query, matches) in queries.iter().zip(results) {
            writeln!(out, "{}: {}", query, matches.join(" "))?;
        }
    }
    Ok(())
}

/// Root on the first line, then one line per edge, indented by depth.
pub fn write_tree<M: Metric>(out: &mut impl Write, tree: &BkTree<M>) -> Result<()> {
    if let Some(root) = tree.root_word() {
        writeln!(out, "{}", root)?;
    }
    for edge in tree.edges() {
        writeln!(out, "{}", display::edge_line(&edge))?;
    }
    Ok(())
}

/// Boxed summary, or pretty-printed JSON.
pub fn write_stats<M: Metric>(out: &mut impl Write, tree: &BkTree<M>, json: bool) -> Result<()> {
    let stats = tree.stats();
    if json {
        serde_json::to_writer_pretty(&mut *out, &stats)?;
        writeln!(out)?;
    } else {
        display::write_stats(out, &stats, tree.root_word())?;
    }
    Ok(())
}
