//! Reading-time estimation pipeline.
//!
//! The pipeline runs in four steps:
//! 1. Tokenize the text into words and count sentences
//! 2. Reject text without words or sentences
//! 3. Count syllables across a pool of workers
//! 4. Derive the readability index and the adjusted reading time
//!
//! # Module Structure
//!
//! - [`parallel`] - partitioned syllable counting on a Rayon pool
//! - [`readability`] - readability index and reading-time formula
//! - [`error`] - `EstimateError`

pub mod error;
pub mod parallel;
pub mod readability;

pub use error::EstimateError;
pub use parallel::{count_syllables_parallel, partition, SyllableAggregator};
pub use readability::{readability_index, reading_time, ReadabilityFormula};

use std::time::Instant;

use tracing::debug;

use crate::text::{HyphenPolicy, Tokens};

/// Default reading speed in words per minute.
pub const DEFAULT_READING_SPEED: f64 = 180.0;

/// Default number of syllable-counting workers.
pub const DEFAULT_WORKERS: usize = 4;

/// Metrics computed for one text.
///
/// Immutable once built; the caller owns it after estimation returns.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingEstimate {
    reading_time_minutes: f64,
    word_count: usize,
    sentence_count: usize,
    syllable_count: usize,
    readability_index: f64,
}

impl ReadingEstimate {
    /// Assemble an estimate from already computed metrics.
    pub fn new(
        reading_time_minutes: f64,
        word_count: usize,
        sentence_count: usize,
        syllable_count: usize,
        readability_index: f64,
    ) -> Self {
        Self {
            reading_time_minutes,
            word_count,
            sentence_count,
            syllable_count,
            readability_index,
        }
    }

    /// Estimated reading time in minutes, rounded to two decimals.
    pub fn reading_time_minutes(&self) -> f64 {
        self.reading_time_minutes
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    pub fn syllable_count(&self) -> usize {
        self.syllable_count
    }

    pub fn readability_index(&self) -> f64 {
        self.readability_index
    }

    /// True when the readability index fell below the hard-text threshold.
    pub fn is_hard_text(&self) -> bool {
        self.readability_index < readability::HARD_TEXT_THRESHOLD
    }
}

/// Inputs that shape an estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateOptions {
    /// Base reading speed in words per minute
    pub reading_speed_wpm: f64,
    /// Whether the text comes with pictures, tables or charts
    pub has_visuals: bool,
    /// Number of syllable-counting workers (0 is treated as 1)
    pub workers: usize,
    /// Tokenization of hyphenated compounds
    pub hyphen_policy: HyphenPolicy,
    /// Readability index coefficients
    pub formula: ReadabilityFormula,
}

impl Default for EstimateOptions {
    fn default() -> Self {
        Self {
            reading_speed_wpm: DEFAULT_READING_SPEED,
            has_visuals: false,
            workers: DEFAULT_WORKERS,
            hyphen_policy: HyphenPolicy::default(),
            formula: ReadabilityFormula::default(),
        }
    }
}

impl EstimateOptions {
    /// Options with the given reading speed and defaults for the rest.
    pub fn new(reading_speed_wpm: f64) -> Self {
        Self {
            reading_speed_wpm,
            ..Self::default()
        }
    }

    /// Set whether the text has visual elements.
    pub fn visuals(mut self, has_visuals: bool) -> Self {
        self.has_visuals = has_visuals;
        self
    }

    /// Set the worker count.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the hyphen policy.
    pub fn hyphen_policy(mut self, policy: HyphenPolicy) -> Self {
        self.hyphen_policy = policy;
        self
    }

    /// Set the readability formula.
    pub fn formula(mut self, formula: ReadabilityFormula) -> Self {
        self.formula = formula;
        self
    }
}

/// Runs the estimation pipeline with fixed options.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    options: EstimateOptions,
}

impl Estimator {
    pub fn new(options: EstimateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EstimateOptions {
        &self.options
    }

    /// Estimate the reading time of `text`.
    ///
    /// Fails with [`EstimateError::InvalidSpeed`] for a non-positive speed and
    /// with [`EstimateError::InvalidText`] when the text has no words or no
    /// sentences. Syllables are only counted for valid input.
    pub fn estimate(&self, text: &str) -> Result<ReadingEstimate, EstimateError> {
        let speed = self.options.reading_speed_wpm;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(EstimateError::InvalidSpeed(speed));
        }

        let started = Instant::now();
        let tokens = Tokens::from_text(text, self.options.hyphen_policy);
        if tokens.is_empty() {
            debug!(
                words = tokens.word_count(),
                sentences = tokens.sentence_count(),
                "Rejecting text without words or sentences"
            );
            return Err(EstimateError::InvalidText);
        }

        let aggregator = SyllableAggregator::new(self.options.workers);
        let syllables = aggregator.count(tokens.words());

        let index =
            self.options
                .formula
                .index(tokens.word_count(), tokens.sentence_count(), syllables);
        let minutes = reading_time(tokens.word_count(), index, speed, self.options.has_visuals);

        debug!(
            words = tokens.word_count(),
            sentences = tokens.sentence_count(),
            syllables,
            index,
            minutes,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Estimated reading time"
        );

        Ok(ReadingEstimate::new(
            minutes,
            tokens.word_count(),
            tokens.sentence_count(),
            syllables,
            index,
        ))
    }
}

/// Estimate reading time with the default tokenizer and formula.
pub fn estimate_reading_time(
    text: &str,
    reading_speed_wpm: f64,
    has_visuals: bool,
    workers: usize,
) -> Result<ReadingEstimate, EstimateError> {
    let options = EstimateOptions::new(reading_speed_wpm)
        .visuals(has_visuals)
        .workers(workers);
    Estimator::new(options).estimate(text)
}
