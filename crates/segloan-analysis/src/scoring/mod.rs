//! Borrowability scoring.
//!
//! The score relates a segment's borrowing frequency (SEGBO, normalized
//! over the PHOIBLE sample) to its baseline typological frequency
//! (PHOIBLE) via an odds-ratio-like formula. Two smoothing policies
//! produce two tables: raw corrected counts and Laplace (+1) counts.

pub mod pipeline;
pub mod score;
pub mod smoothing;
pub mod table;

pub use pipeline::{run_model, ModelOutput};
pub use score::borrowability_score;
pub use smoothing::{correct_baseline, CorrectedBaseline};
pub use table::{BorrowabilityEntry, BorrowabilityTable};
