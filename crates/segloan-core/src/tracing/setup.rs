//! Tracing initialization and configuration.

use std::sync::Once;

use ::tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Segloan tracing/logging system.
///
/// Reads the `SEGLOAN_LOG` environment variable for per-subsystem log
/// levels, e.g. `SEGLOAN_LOG=segloan_analysis=debug`.
///
/// Falls back to `segloan=info` if `SEGLOAN_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SEGLOAN_LOG")
            .unwrap_or_else(|_| EnvFilter::new("segloan=info"));
        let filter_desc = filter.to_string();

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();

        debug!(filter = %filter_desc, "tracing initialized");
    });
}
