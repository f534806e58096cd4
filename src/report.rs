//! Text input and result persistence.
//!
//! The estimator works on an in-memory string and returns a
//! [`ReadingEstimate`]. This module sits on either side of it: reading the
//! source file fully into memory, and writing the estimate as JSON with
//! stable field names.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::estimator::ReadingEstimate;

/// Errors raised while reading input text or persisting results.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize result: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to parse result file {path}: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Serialized form of a [`ReadingEstimate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EstimateRecord {
    pub reading_time: f64,
    pub word_count: usize,
    pub sentence_count: usize,
    pub syllable_count: usize,
    pub flesch_kincaid_index: f64,
}

impl From<&ReadingEstimate> for EstimateRecord {
    fn from(estimate: &ReadingEstimate) -> Self {
        Self {
            reading_time: estimate.reading_time_minutes(),
            word_count: estimate.word_count(),
            sentence_count: estimate.sentence_count(),
            syllable_count: estimate.syllable_count(),
            flesch_kincaid_index: estimate.readability_index(),
        }
    }
}

impl From<EstimateRecord> for ReadingEstimate {
    fn from(record: EstimateRecord) -> Self {
        ReadingEstimate::new(
            record.reading_time,
            record.word_count,
            record.sentence_count,
            record.syllable_count,
            record.flesch_kincaid_index,
        )
    }
}

/// Label/value rows describing an estimate, in display order.
///
/// Shared by the plain summary and the result view.
pub fn summary_rows(estimate: &ReadingEstimate) -> Vec<(&'static str, String)> {
    let difficulty = if estimate.is_hard_text() {
        "hard (read 20% slower)"
    } else {
        "normal"
    };
    vec![
        (
            "Reading time",
            format!("{:.2} min", estimate.reading_time_minutes()),
        ),
        ("Words", estimate.word_count().to_string()),
        ("Sentences", estimate.sentence_count().to_string()),
        ("Syllables", estimate.syllable_count().to_string()),
        (
            "Flesch-Kincaid Index",
            format!("{:.2}", estimate.readability_index()),
        ),
        ("Difficulty", difficulty.to_string()),
    ]
}

/// Plain-text summary for non-interactive output.
pub fn format_summary(estimate: &ReadingEstimate, source: Option<&Path>) -> String {
    let mut out = String::from("LitTime Results\n");
    if let Some(path) = source {
        out.push_str(&format!("File: {}\n", path.display()));
    }
    out.push('\n');
    for (label, value) in summary_rows(estimate) {
        out.push_str(&format!("{}: {}\n", label, value));
    }
    out
}

/// Read a whole text file into memory.
pub fn read_text(path: &Path) -> Result<String, ReportError> {
    let text = fs::read_to_string(path).map_err(|source| ReportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "Read input text");
    Ok(text)
}

/// Render an estimate as pretty-printed JSON with a trailing newline.
pub fn to_json(estimate: &ReadingEstimate) -> Result<String, ReportError> {
    let mut json = serde_json::to_string_pretty(&EstimateRecord::from(estimate))
        .map_err(ReportError::Serialize)?;
    json.push('\n');
    Ok(json)
}

/// Write an estimate to `path` as JSON, creating parent directories.
pub fn save_result(estimate: &ReadingEstimate, path: &Path) -> Result<(), ReportError> {
    let json = to_json(estimate)?;
    let write_err = |source: std::io::Error| ReportError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut file = fs::File::create(path).map_err(write_err)?;
    file.write_all(json.as_bytes()).map_err(write_err)?;
    debug!(path = %path.display(), "Saved result");
    Ok(())
}

/// Load an estimate previously written by [`save_result`].
pub fn load_result(path: &Path) -> Result<ReadingEstimate, ReportError> {
    let contents = fs::read_to_string(path).map_err(|source| ReportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let record: EstimateRecord =
        serde_json::from_str(&contents).map_err(|source| ReportError::Deserialize {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(record.into())
}
