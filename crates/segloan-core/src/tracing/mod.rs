//! Tracing setup for Segloan.

pub mod setup;

pub use setup::init_tracing;
