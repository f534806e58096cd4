//! Readability index and reading-time model.
//!
//! Both formulas share the Flesch shape
//! `206.835 - a * (words / sentences) - b * (syllables / words)`; higher
//! scores mean easier text. Text scoring below [`HARD_TEXT_THRESHOLD`] is
//! read more slowly.

use serde::{Deserialize, Serialize};

/// Scores below this are treated as hard text.
pub const HARD_TEXT_THRESHOLD: f64 = 60.0;

/// Reading speed multiplier for hard text.
pub const HARD_TEXT_SPEED_FACTOR: f64 = 0.8;

/// Reading time multiplier for text with pictures, tables or charts.
pub const VISUALS_TIME_FACTOR: f64 = 1.1;

/// Coefficients of the readability index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadabilityFormula {
    /// Flesch–Kincaid adapted for Russian (Oborneva): `1.3` and `60.1`.
    #[default]
    Russian,
    /// Original English Flesch Reading Ease: `1.015` and `84.6`.
    Flesch,
}

impl ReadabilityFormula {
    fn coefficients(self) -> (f64, f64) {
        match self {
            ReadabilityFormula::Russian => (1.3, 60.1),
            ReadabilityFormula::Flesch => (1.015, 84.6),
        }
    }

    /// Compute the index for the given counts.
    ///
    /// Returns 0.0 when there are no words or no sentences.
    pub fn index(self, words: usize, sentences: usize, syllables: usize) -> f64 {
        if words == 0 || sentences == 0 {
            return 0.0;
        }

        let (sentence_weight, syllable_weight) = self.coefficients();
        let words = words as f64;
        let avg_sentence_len = words / sentences as f64;
        let avg_syllables = syllables as f64 / words;

        206.835 - sentence_weight * avg_sentence_len - syllable_weight * avg_syllables
    }
}

impl std::fmt::Display for ReadabilityFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadabilityFormula::Russian => write!(f, "russian"),
            ReadabilityFormula::Flesch => write!(f, "flesch"),
        }
    }
}

impl std::str::FromStr for ReadabilityFormula {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "russian" | "ru" => Ok(ReadabilityFormula::Russian),
            "flesch" | "en" => Ok(ReadabilityFormula::Flesch),
            _ => Err(format!(
                "Unknown formula: '{}'. Supported formulas: russian, flesch",
                s
            )),
        }
    }
}

/// Readability index with the default formula.
pub fn readability_index(words: usize, sentences: usize, syllables: usize) -> f64 {
    ReadabilityFormula::default().index(words, sentences, syllables)
}

/// Reading time in minutes, rounded to two decimals.
///
/// Rounding is half away from zero.
pub fn reading_time(words: usize, readability: f64, speed_wpm: f64, has_visuals: bool) -> f64 {
    let mut speed = speed_wpm;
    if readability < HARD_TEXT_THRESHOLD {
        speed *= HARD_TEXT_SPEED_FACTOR;
    }

    let mut minutes = words as f64 / speed;
    if has_visuals {
        minutes *= VISUALS_TIME_FACTOR;
    }

    round_to_hundredths(minutes)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
