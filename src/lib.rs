//! LitTime Library
//!
//! Estimates how long a text takes to read from its word, sentence and
//! syllable counts. Russian and English text are both supported.

pub mod cli;
pub mod config;
pub mod estimator;
pub mod logging;
pub mod report;
pub mod text;
pub mod tui;

pub use config::Config;
pub use estimator::{
    estimate_reading_time, EstimateError, EstimateOptions, Estimator, ReadabilityFormula,
    ReadingEstimate,
};
pub use report::{EstimateRecord, ReportError};
pub use text::{count_syllables, HyphenPolicy};
