//! Correlation errors.

use super::error_code::{self, SegloanErrorCode};

/// Errors that can occur during cross-model correlation.
#[derive(Debug, thiserror::Error)]
pub enum CorrelationError {
    #[error("No segments shared by all three tables")]
    EmptyIntersection,

    #[error("Vectors have mismatched lengths: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Need at least 3 paired observations, got {n}")]
    TooFewObservations { n: usize },

    #[error("Zero variance in {vector} vector")]
    ZeroVariance { vector: String },
}

impl SegloanErrorCode for CorrelationError {
    fn error_code(&self) -> &'static str {
        error_code::CORRELATION_ERROR
    }
}
