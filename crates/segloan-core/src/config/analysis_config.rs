//! Analysis configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the scoring and correlation subsystems.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Divide borrowability scores by 6 (dormant model variant). Default: false.
    pub divide_by_six: Option<bool>,
    /// Minimum raw borrowing-event count for a segment to enter the
    /// correlation. Default: 10.
    pub min_borrowing_count: Option<u64>,
    /// SEGBO absolute frequency at or above which a segment appears in the
    /// high-frequency diagnostic slice. Default: 10.
    pub report_high_threshold: Option<u64>,
    /// SEGBO absolute frequency at or below which a segment appears in the
    /// low-frequency diagnostic slice. Default: 2.
    pub report_low_threshold: Option<u64>,
    /// Maximum rows logged per diagnostic slice. Default: 10.
    pub report_cap: Option<usize>,
}

impl AnalysisConfig {
    /// Returns the effective divide-by-six flag, defaulting to false.
    pub fn effective_divide_by_six(&self) -> bool {
        self.divide_by_six.unwrap_or(false)
    }

    /// Returns the effective minimum borrowing count, defaulting to 10.
    pub fn effective_min_borrowing_count(&self) -> u64 {
        self.min_borrowing_count.unwrap_or(10)
    }

    /// Returns the effective high-frequency slice threshold, defaulting to 10.
    pub fn effective_report_high_threshold(&self) -> u64 {
        self.report_high_threshold.unwrap_or(10)
    }

    /// Returns the effective low-frequency slice threshold, defaulting to 2.
    pub fn effective_report_low_threshold(&self) -> u64 {
        self.report_low_threshold.unwrap_or(2)
    }

    /// Returns the effective diagnostic slice cap, defaulting to 10.
    pub fn effective_report_cap(&self) -> usize {
        self.report_cap.unwrap_or(10)
    }
}
