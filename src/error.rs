// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Two disjoint families: [`QueryError`] for rejected distance windows, and
//! [`VocabError`] for vocabulary input that cannot become a word list. The
//! metric and tree construction are total and have no error type.

use thiserror::Error;

/// A distance window that cannot be queried.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    #[error("minimum distance {min} exceeds maximum distance {max}")]
    InvertedWindow { min: usize, max: usize },

    #[error("{which} distance must be non-negative, got {value}")]
    NegativeDistance { which: &'static str, value: i64 },
}

/// Vocabulary input that cannot be turned into a word list.
#[derive(Error, Debug)]
pub enum VocabError {
    #[error("vocabulary entry {index} is not a string: {found}")]
    NonStringEntry { index: usize, found: String },

    #[error("vocabulary JSON must be an array of strings, got {found}")]
    NotAnArray { found: &'static str },

    #[error("invalid vocabulary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read vocabulary: {0}")]
    Io(#[from] std::io::Error),
}
