//! Analysis engine for Segloan.
//!
//! The pipeline is straight-line: load two CLDF datasets, collapse value
//! rows into per-language segment inventories, derive per-segment
//! frequencies, combine them into borrowability scores, and validate the
//! scores by Pearson correlation against an external model.

pub mod correlation;
pub mod dataset;
pub mod inventory;
pub mod scoring;
