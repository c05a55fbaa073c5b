//! Input and output path configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Paths to the CLDF input tables and the result files.
///
/// Defaults mirror the conventional repository layout: both datasets
/// checked out under `data/`, results written next to the working
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// SEGBO value table (one row per borrowing event).
    pub segbo_values: PathBuf,
    /// SEGBO language table.
    pub segbo_languages: PathBuf,
    /// PHOIBLE value table (one row per inventory entry).
    pub phoible_values: PathBuf,
    /// PHOIBLE language table.
    pub phoible_languages: PathBuf,
    /// PHOIBLE feature table (`parameters.csv`, keyed by `Name`).
    pub phoible_parameters: PathBuf,
    /// Plain raw borrowability table (consumed by the correlator).
    pub borrowability_out: PathBuf,
    /// Plain Laplace-smoothed borrowability table.
    pub borrowability_laplace_out: PathBuf,
    /// Raw table left-joined with PHOIBLE features.
    pub borrowability_with_features_out: PathBuf,
    /// External neighbor-graph model table (keyed by `Phoneme`).
    pub graph_model: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            segbo_values: PathBuf::from("data/segbo/cldf/values.csv"),
            segbo_languages: PathBuf::from("data/segbo/cldf/languages.csv"),
            phoible_values: PathBuf::from("data/phoible/cldf/values.csv"),
            phoible_languages: PathBuf::from("data/phoible/cldf/languages.csv"),
            phoible_parameters: PathBuf::from("data/phoible/cldf/parameters.csv"),
            borrowability_out: PathBuf::from("borrowability.csv"),
            borrowability_laplace_out: PathBuf::from("borrowability_laplace.csv"),
            borrowability_with_features_out: PathBuf::from(
                "borrowability_w_features.csv",
            ),
            graph_model: PathBuf::from("borrowability_on_the_graph.csv"),
        }
    }
}
