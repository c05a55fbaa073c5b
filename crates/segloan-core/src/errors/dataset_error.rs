//! Dataset loading errors.

use super::error_code::{self, SegloanErrorCode};

/// Errors that can occur while reading and joining CLDF tables.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {path}: {message}")]
    Csv { path: String, message: String },

    #[error("Missing column {column} in {path}")]
    MissingColumn { path: String, column: String },

    #[error("Dataset {path} contains no rows")]
    Empty { path: String },
}

impl SegloanErrorCode for DatasetError {
    fn error_code(&self) -> &'static str {
        error_code::DATASET_ERROR
    }
}
