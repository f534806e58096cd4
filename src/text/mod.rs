//! Text analysis primitives for reading-time estimation.
//!
//! - [`tokenizer`] - word and sentence splitting
//! - [`syllables`] - per-word syllable heuristics for Cyrillic and Latin script

pub mod syllables;
pub mod tokenizer;

pub use syllables::{count_syllables, Script};
pub use tokenizer::{count_sentences, split_words, split_words_with, HyphenPolicy, Tokens};
