//! Core types, errors, config, and tracing for Segloan.
//!
//! Segloan estimates the borrowability of phonological segments from two
//! CLDF datasets: PHOIBLE (baseline cross-linguistic frequency) and SEGBO
//! (attested borrowing events). This crate carries everything shared
//! between the analysis library and the binaries.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;
