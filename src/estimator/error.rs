//! Errors raised by the estimation pipeline.

/// Error type for reading-time estimation.
///
/// Both variants mean the caller has to supply different input; retrying
/// with the same arguments always fails the same way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    /// The text has no words or no sentences.
    #[error("text is empty or invalid")]
    InvalidText,

    /// Reading speed is zero, negative or not a finite number.
    #[error("reading speed must be a positive number of words per minute, got {0}")]
    InvalidSpeed(f64),
}
