// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit-distance range queries over a vocabulary, indexed with a BK-tree.
//!
//! Ask "which words are between `min` and `max` edits away from this one"
//! without comparing the query against every word. The tree labels each edge
//! with the exact distance between its endpoints; the triangle inequality then
//! rules out whole subtrees at query time.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │   vocab.rs   │────▶│    tree/      │────▶│   batch.rs   │
//! │ (Vocabulary, │     │ (BkTree,      │     │ (query_batch)│
//! │  load, NFC)  │     │  query, edges)│     │              │
//! └──────────────┘     └───────────────┘     └──────────────┘
//!                              │
//!                              ▼
//!                      ┌───────────────┐
//!                      │    fuzzy/     │
//!                      │ (distance,    │
//!                      │  Metric)      │
//!                      └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use bkvocab::{distance, BkTree, QueryWindow};
//!
//! let tree = BkTree::from_words(["game", "fame", "same", "gate", "frame"]);
//!
//! // Everything one or two edits from "fame", except exact duplicates
//! let window = QueryWindow::new(1, 2).unwrap();
//! for word in tree.query_window("fame", window) {
//!     assert!((1..=2).contains(&distance("fame", word)));
//! }
//! ```
//!
//! The first word inserted becomes the root and is never returned by a query.
//! See [`tree`] for why.

pub mod batch;
mod error;
pub mod fuzzy;
pub mod tree;
pub mod vocab;

pub use batch::query_batch;
pub use error::{QueryError, VocabError};
pub use fuzzy::{distance, Levenshtein, Metric};
pub use tree::{BkTree, Edge, Edges, QueryStats, QueryWindow, TreeStats};
pub use vocab::Vocabulary;

#[cfg(feature = "unicode-normalization")]
pub use vocab::normalize;
