//! Correlate both borrowability models against SEGBO borrowing
//! frequencies and print the Pearson results.
//!
//! No flags; paths and thresholds come from `segloan.toml` and
//! `SEGLOAN_*` environment variables.

use std::path::Path;
use std::process::ExitCode;

use segloan_analysis::correlation::run_correlation;
use segloan_core::config::SegloanConfig;
use segloan_core::errors::{PipelineError, SegloanErrorCode};
use segloan_core::tracing::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.report_string());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), PipelineError> {
    let config = SegloanConfig::load(Path::new("."))?;
    let report = run_correlation(&config)?;

    println!(
        "SEGBO v Model 1: {} p-value: {}",
        report.model_1.correlation, report.model_1.p_value
    );
    println!(
        "SEGBO v Model 2: {} p-value: {}",
        report.model_2.correlation, report.model_2.p_value
    );
    Ok(())
}
