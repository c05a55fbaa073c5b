//! Pipeline errors.

use super::error_code::SegloanErrorCode;
use super::{ConfigError, CorrelationError, DatasetError, ScoreError};

/// Errors that can occur during a pipeline run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Score error: {0}")]
    Score(#[from] ScoreError),

    #[error("Correlation error: {0}")]
    Correlation(#[from] CorrelationError),
}

impl SegloanErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Dataset(e) => e.error_code(),
            Self::Score(e) => e.error_code(),
            Self::Correlation(e) => e.error_code(),
        }
    }
}
