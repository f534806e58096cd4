//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::estimator::{ReadabilityFormula, DEFAULT_READING_SPEED, DEFAULT_WORKERS};
use crate::text::HyphenPolicy;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub estimator: EstimatorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Estimator defaults, overridable per run from the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Reading speed in words per minute
    #[serde(default = "default_reading_speed")]
    pub default_reading_speed: u32,
    /// Number of syllable-counting workers (0 is treated as 1)
    #[serde(default = "default_workers")]
    pub default_workers: usize,
    /// Whether texts are assumed to contain visual elements
    #[serde(default)]
    pub has_visuals: bool,
    /// How hyphenated compounds are tokenized ("join" or "split")
    #[serde(default)]
    pub hyphenated_words: HyphenPolicy,
    /// Readability index coefficients ("russian" or "flesch")
    #[serde(default)]
    pub formula: ReadabilityFormula,
}

pub fn default_reading_speed() -> u32 {
    DEFAULT_READING_SPEED as u32
}

pub fn default_workers() -> usize {
    DEFAULT_WORKERS
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            default_reading_speed: default_reading_speed(),
            default_workers: default_workers(),
            has_visuals: false,
            hyphenated_words: HyphenPolicy::default(),
            formula: ReadabilityFormula::default(),
        }
    }
}

/// Result persistence configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JSON file the result is written to
    #[serde(default = "default_output_file")]
    pub file: String,
}

pub fn default_output_file() -> String {
    "littime_results.json".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: default_output_file(),
        }
    }
}
