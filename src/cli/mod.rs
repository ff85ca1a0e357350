// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the bkvocab command-line interface.
//!
//! Four subcommands, all of which build a tree from a vocabulary file first:
//! `query` for one word, `batch` for a file of words, `tree` to dump the edges,
//! and `stats` for the tree's shape. The vocabulary path and the default
//! maximum distance can come from the environment.

pub mod display;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bkvocab",
    about = "Edit-distance range queries over a vocabulary, backed by a BK-tree",
    version
)]
pub struct Cli {
    /// Log at info level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the words come from and how to prepare them.
#[derive(Args)]
pub struct VocabArgs {
    /// Vocabulary file: one word per line, or a JSON array of strings (.json)
    #[arg(long, env = "BKVOCAB_VOCAB")]
    pub vocab: PathBuf,

    /// NFC-normalize vocabulary and query words before indexing
    #[cfg(feature = "unicode-normalization")]
    #[arg(long)]
    pub normalize: bool,
}

/// The `[min, max]` distance window.
#[derive(Args)]
pub struct WindowArgs {
    /// Maximum edit distance (inclusive)
    #[arg(long, default_value = "1", env = "BKVOCAB_MAX_DIST")]
    pub max: usize,

    /// Minimum edit distance (inclusive); raise it to skip near-duplicates
    #[arg(long, default_value = "0")]
    pub min: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find vocabulary words within the distance window of WORD
    Query {
        /// Word to search for
        word: String,

        #[command(flatten)]
        vocab: VocabArgs,

        #[command(flatten)]
        window: WindowArgs,

        /// Print results as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Run every line of a queries file against the vocabulary
    Batch {
        /// File with one query word per line
        #[arg(long)]
        queries: PathBuf,

        #[command(flatten)]
        vocab: VocabArgs,

        #[command(flatten)]
        window: WindowArgs,

        /// Print results as a JSON array of {query, matches} objects
        #[arg(long)]
        json: bool,
    },

    /// Print the tree: root first, then every edge indented by depth
    Tree {
        #[command(flatten)]
        vocab: VocabArgs,
    },

    /// Summarize the tree's shape
    Stats {
        #[command(flatten)]
        vocab: VocabArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
