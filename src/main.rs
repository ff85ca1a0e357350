// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bkvocab::{query_batch, BkTree, QueryWindow, Vocabulary};

mod cli;
use cli::{output, Cli, Commands, VocabArgs, WindowArgs};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

/// Vocabularies at least this large get a progress bar while indexing.
#[cfg(feature = "parallel")]
const PROGRESS_THRESHOLD: usize = 10_000;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli, &mut io::stdout().lock()) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for results.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Query {
            word,
            vocab,
            window,
            json,
        } => {
            let window = query_window(&window)?;
            let tree = load_tree(&vocab)?;
            let word = prepare_query(&vocab, word);
            let matches = tree.query_window(&word, window);
            output::write_matches(out, &matches, json)?;
        }

        Commands::Batch {
            queries,
            vocab,
            window,
            json,
        } => {
            let window = query_window(&window)?;
            let text = fs::read_to_string(&queries)
                .with_context(|| format!("failed to read queries {}", queries.display()))?;
            let queries: Vec<String> = Vocabulary::from_lines(&text)
                .into_iter()
                .map(|query| prepare_query(&vocab, query))
                .collect();

            let tree = load_tree(&vocab)?;
            let started = Instant::now();
            let results = query_batch(&tree, &queries, window);
            info!(
                queries = queries.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "batch finished"
            );
            output::write_batch(out, &queries, &results, json)?;
        }

        Commands::Tree { vocab } => {
            let tree = load_tree(&vocab)?;
            output::write_tree(out, &tree)?;
        }

        Commands::Stats { vocab, json } => {
            let tree = load_tree(&vocab)?;
            output::write_stats(out, &tree, json)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn query_window(args: &WindowArgs) -> Result<QueryWindow> {
    Ok(QueryWindow::new(args.min, args.max)?)
}

fn load_tree(args: &VocabArgs) -> Result<BkTree> {
    let vocab = Vocabulary::load(&args.vocab)
        .with_context(|| format!("failed to load vocabulary {}", args.vocab.display()))?;

    #[cfg(feature = "unicode-normalization")]
    let vocab = if args.normalize {
        vocab.normalized()
    } else {
        vocab
    };

    let words = vocab.len();
    let started = Instant::now();
    let tree = build_tree(vocab);
    info!(
        words,
        height = tree.height(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "indexed vocabulary"
    );
    Ok(tree)
}

#[cfg(feature = "parallel")]
fn build_tree(vocab: Vocabulary) -> BkTree {
    if vocab.len() < PROGRESS_THRESHOLD || !atty::is(atty::Stream::Stderr) {
        return BkTree::from_words(vocab);
    }

    let progress = ProgressBar::new(vocab.len() as u64);
    progress.set_style(create_progress_style());
    progress.set_prefix("indexing");

    let mut tree = BkTree::new();
    for word in vocab {
        tree.insert(word);
        progress.inc(1);
    }
    progress.finish_and_clear();
    tree
}

#[cfg(not(feature = "parallel"))]
fn build_tree(vocab: Vocabulary) -> BkTree {
    BkTree::from_words(vocab)
}

#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

#[cfg(feature = "unicode-normalization")]
fn prepare_query(args: &VocabArgs, query: String) -> String {
    if args.normalize {
        bkvocab::normalize(&query)
    } else {
        query
    }
}

#[cfg(not(feature = "unicode-normalization"))]
fn prepare_query(_args: &VocabArgs, query: String) -> String {
    query
}
