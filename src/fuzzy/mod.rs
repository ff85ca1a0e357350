// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: the edit-distance metric the tree is built on.

mod levenshtein;

pub use levenshtein::*;
