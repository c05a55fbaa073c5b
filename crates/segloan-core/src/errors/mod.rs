//! Error handling for Segloan.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod correlation_error;
pub mod dataset_error;
pub mod error_code;
pub mod pipeline_error;
pub mod score_error;

pub use config_error::ConfigError;
pub use correlation_error::CorrelationError;
pub use dataset_error::DatasetError;
pub use error_code::SegloanErrorCode;
pub use pipeline_error::PipelineError;
pub use score_error::ScoreError;
