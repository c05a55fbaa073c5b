//! Run the borrowability model and write the result tables.
//!
//! No flags; paths and thresholds come from `segloan.toml` and
//! `SEGLOAN_*` environment variables.

use std::path::Path;
use std::process::ExitCode;

use tracing::info;

use segloan_analysis::scoring::run_model;
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
    let output = run_model(&config)?;
    info!(
        segments = output.raw.entries().len(),
        raw = %config.data.borrowability_out.display(),
        laplace = %config.data.borrowability_laplace_out.display(),
        with_features = %config.data.borrowability_with_features_out.display(),
        "model run complete"
    );
    Ok(())
}
