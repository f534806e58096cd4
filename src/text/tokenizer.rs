//! Word and sentence tokenization.
//!
//! Words are maximal runs of Unicode letters and digits. Under the default
//! [`HyphenPolicy::Join`] a single hyphen embedded between two such runs keeps
//! the compound together (`One-two` is one word); any other punctuation is a
//! separator. Sentences are the non-blank segments left after splitting on
//! runs of `.`, `!` and `?`.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref WORD_JOINED: Regex =
        Regex::new(r"[\p{L}\p{N}]+(?:-[\p{L}\p{N}]+)*").expect("word pattern is valid");
    static ref WORD_SPLIT: Regex = Regex::new(r"[\p{L}\p{N}]+").expect("word pattern is valid");
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?]+").expect("sentence pattern is valid");
}

/// How hyphenated compounds are tokenized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HyphenPolicy {
    /// `well-known` is one word.
    #[default]
    Join,
    /// `well-known` is two words.
    Split,
}

impl HyphenPolicy {
    fn pattern(self) -> &'static Regex {
        match self {
            HyphenPolicy::Join => &WORD_JOINED,
            HyphenPolicy::Split => &WORD_SPLIT,
        }
    }
}

impl std::fmt::Display for HyphenPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HyphenPolicy::Join => write!(f, "join"),
            HyphenPolicy::Split => write!(f, "split"),
        }
    }
}

/// Split text into words using the default hyphen policy.
pub fn split_words(text: &str) -> Vec<&str> {
    split_words_with(text, HyphenPolicy::default())
}

/// Split text into words using the given hyphen policy.
///
/// The returned slices borrow from `text` and keep their original case.
pub fn split_words_with(text: &str, policy: HyphenPolicy) -> Vec<&str> {
    policy.pattern().find_iter(text).map(|m| m.as_str()).collect()
}

/// Count sentences in text.
///
/// Returns 0 for blank text and 1 for non-blank text without any terminal
/// punctuation.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_END
        .split(text.trim())
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Result of a single tokenization pass over a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens<'a> {
    words: Vec<&'a str>,
    sentence_count: usize,
}

impl<'a> Tokens<'a> {
    /// Tokenize `text` into words and count its sentences.
    pub fn from_text(text: &'a str, policy: HyphenPolicy) -> Self {
        Self {
            words: split_words_with(text, policy),
            sentence_count: count_sentences(text),
        }
    }

    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// True when there is nothing to estimate: no words or no sentences.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() || self.sentence_count == 0
    }
}
