//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Create a temporary directory holding a file with the given contents
pub fn temp_text(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write temp file");
    (temp_dir, path)
}

/// Text of `sentences` sentences, each `words_per_sentence` words long
pub fn generated_text(sentences: usize, words_per_sentence: usize) -> String {
    const WORDS: [&str; 6] = ["reading", "книга", "time", "слово", "estimate", "text"];
    let mut out = String::new();
    for s in 0..sentences {
        let sentence: Vec<&str> = (0..words_per_sentence)
            .map(|w| WORDS[(s + w) % WORDS.len()])
            .collect();
        out.push_str(&sentence.join(" "));
        out.push_str(". ");
    }
    out
}
