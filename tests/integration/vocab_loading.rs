//! Loading vocabularies from files.

use std::fs;

use bkvocab::{VocabError, Vocabulary};
use tempfile::tempdir;

use crate::common::DEMO_WORDS;

#[test]
fn test_load_text_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, DEMO_WORDS.join("\n")).unwrap();

    let vocab = Vocabulary::load(&path).unwrap();
    assert_eq!(vocab.len(), DEMO_WORDS.len());
    assert_eq!(vocab.into_words(), DEMO_WORDS);
}

#[test]
fn test_load_text_file_with_crlf_and_blank_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, "game\r\n\r\nfame\r\nsame\r\n").unwrap();

    let vocab = Vocabulary::load(&path).unwrap();
    assert_eq!(vocab.into_words(), vec!["game", "fame", "same"]);
}

#[test]
fn test_load_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("words.JSON");
    fs::write(&path, serde_json::to_string(&DEMO_WORDS).unwrap()).unwrap();

    let vocab = Vocabulary::load(&path).unwrap();
    assert_eq!(vocab.into_words(), DEMO_WORDS);
}

#[test]
fn test_load_json_with_non_string_entry() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("words.json");
    fs::write(&path, r#"["game", null, "fame"]"#).unwrap();

    let err = Vocabulary::load(&path).unwrap_err();
    assert!(matches!(err, VocabError::NonStringEntry { index: 1, .. }));
    assert_eq!(err.to_string(), "vocabulary entry 1 is not a string: null");
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let err = Vocabulary::load(&dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, VocabError::Io(_)));
}

#[test]
fn test_empty_file_is_empty_vocabulary() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let vocab = Vocabulary::load(&path).unwrap();
    assert!(vocab.is_empty());
}
