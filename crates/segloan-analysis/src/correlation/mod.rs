//! Cross-model validation by Pearson correlation.

pub mod compare;
pub mod pearson;

pub use compare::{run_correlation, CorrelationReport};
pub use pearson::{pearson, PearsonResult};
