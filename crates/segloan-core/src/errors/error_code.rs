//! SegloanErrorCode trait for structured failure reporting.

/// Trait for converting Segloan errors to stable code strings.
/// Every error enum implements this so the binaries can report a
/// machine-greppable code alongside the human-readable message.
pub trait SegloanErrorCode {
    /// Returns the error code string (e.g., "DATASET_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted report string: `[ERROR_CODE] message`.
    fn report_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the process boundary.
pub const DATASET_ERROR: &str = "DATASET_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SCORE_ERROR: &str = "SCORE_ERROR";
pub const CORRELATION_ERROR: &str = "CORRELATION_ERROR";
