//! Scoring errors.

use super::error_code::{self, SegloanErrorCode};

/// Errors that can occur while building borrowability tables.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("No borrowed segments survive the PHOIBLE restriction")]
    NoBorrowedSegments,

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },
}

impl SegloanErrorCode for ScoreError {
    fn error_code(&self) -> &'static str {
        error_code::SCORE_ERROR
    }
}
