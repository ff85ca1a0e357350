// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vocabulary loading.
//!
//! Turns a file into the ordered word list a [`BkTree`](crate::BkTree) is
//! built from. Two formats: plain text with one word per line, and a JSON
//! array of strings. Neither splits words further. A line containing spaces
//! is a single word.
//!
//! Untyped JSON is checked entry by entry. A number or an object in the array
//! is reported with its index rather than stringified.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use crate::error::VocabError;

/// An ordered list of words, duplicates and order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// One word per line. `\n` and `\r\n` terminators are stripped and empty
    /// lines skipped; everything else on the line is kept verbatim.
    pub fn from_lines(text: &str) -> Self {
        let words = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { words }
    }

    /// A JSON array of strings.
    pub fn from_json(text: &str) -> Result<Self, VocabError> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Array(entries) = value else {
            return Err(VocabError::NotAnArray {
                found: json_kind(&value),
            });
        };

        let words = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::String(word) => Ok(word),
                other => Err(VocabError::NonStringEntry {
                    index,
                    found: other.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { words })
    }

    /// Read a vocabulary file. `.json` files are parsed as JSON, anything else
    /// as one word per line.
    pub fn load(path: &Path) -> Result<Self, VocabError> {
        let text = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let vocab = if is_json {
            Self::from_json(&text)?
        } else {
            Self::from_lines(&text)
        };
        debug!(path = %path.display(), words = vocab.len(), json = is_json, "loaded vocabulary");
        Ok(vocab)
    }

    /// NFC-normalize every word, so a precomposed `é` and `e` + U+0301 become
    /// the same single character before any distance is taken.
    #[cfg(feature = "unicode-normalization")]
    pub fn normalized(self) -> Self {
        let words = self.words.iter().map(|word| normalize(word)).collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl IntoIterator for Vocabulary {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// NFC form of a single word, for normalizing queries the same way as the
/// vocabulary they run against.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(word: &str) -> String {
    word.nfc().collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
