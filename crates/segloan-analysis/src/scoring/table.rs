//! Borrowability tables: construction, ordering, and persistence.

use std::fs::File;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use segloan_core::errors::{DatasetError, ScoreError};
use segloan_core::types::collections::FxHashMap;
use segloan_core::types::Segment;

/// One scored segment. Column names follow the CLDF-adjacent convention
/// of the published result files.
#[derive(Debug, Clone, Serialize)]
pub struct BorrowabilityEntry {
    #[serde(rename = "Segment")]
    pub segment: Segment,
    #[serde(rename = "Borrowability")]
    pub borrowability: f64,
    #[serde(rename = "PHOIBLE_frequency_absolute")]
    pub phoible_absolute: u64,
    #[serde(rename = "PHOIBLE_frequency_relative")]
    pub phoible_relative: f64,
    #[serde(rename = "SEGBO_frequency_absolute")]
    pub segbo_absolute: u64,
    #[serde(rename = "SEGBO_frequency_relative")]
    pub segbo_relative: f64,
}

/// A borrowability table, sorted descending by score.
#[derive(Debug, Clone)]
pub struct BorrowabilityTable {
    entries: Vec<BorrowabilityEntry>,
}

impl BorrowabilityTable {
    /// Build a table from unsorted entries; sorts descending by score,
    /// ties broken by segment label for determinism.
    pub fn new(mut entries: Vec<BorrowabilityEntry>) -> Self {
        entries.sort_by(|a, b| {
            b.borrowability
                .partial_cmp(&a.borrowability)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.segment.cmp(&b.segment))
        });
        Self { entries }
    }

    pub fn entries(&self) -> &[BorrowabilityEntry] {
        &self.entries
    }

    /// Log the diagnostic slices: every entry with SEGBO absolute
    /// frequency ≥ `high`, and the first `cap` entries with SEGBO
    /// absolute frequency ≤ `low`. Both honor the table's score order.
    pub fn log_slices(&self, high: u64, low: u64, cap: usize) {
        info!("segments with ≥{high} borrowing events, by borrowability:");
        for entry in self.entries.iter().filter(|e| e.segbo_absolute >= high) {
            info!(
                "  {}: {:.4} (SEGBO {}, PHOIBLE {})",
                entry.segment, entry.borrowability, entry.segbo_absolute, entry.phoible_absolute
            );
        }
        info!("segments with ≤{low} borrowing events (first {cap}):");
        for entry in self
            .entries
            .iter()
            .filter(|e| e.segbo_absolute <= low)
            .take(cap)
        {
            info!(
                "  {}: {:.4} (SEGBO {}, PHOIBLE {})",
                entry.segment, entry.borrowability, entry.segbo_absolute, entry.phoible_absolute
            );
        }
    }

    /// Write the table as plain CSV.
    pub fn write_plain(&self, path: &Path) -> Result<(), ScoreError> {
        let mut writer = csv::Writer::from_path(path).map_err(|e| ScoreError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        for entry in &self.entries {
            writer.serialize(entry).map_err(|e| ScoreError::Write {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        }
        writer.flush().map_err(|e| ScoreError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Left-join the table against the PHOIBLE feature table
    /// (`Segment = Name`) and write the combined rows. Entries without
    /// a feature row keep empty feature columns.
    ///
    /// The feature table's schema is open (several dozen articulatory
    /// feature columns), so it is carried as raw records and appended
    /// column-for-column after the borrowability columns.
    pub fn write_with_features(
        &self,
        parameters_path: &Path,
        out_path: &Path,
    ) -> Result<(), ScoreError> {
        let features = read_feature_table(parameters_path).map_err(|e| ScoreError::Write {
            path: out_path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut writer = csv::Writer::from_path(out_path).map_err(|e| ScoreError::Write {
            path: out_path.display().to_string(),
            message: e.to_string(),
        })?;

        let write_err = |e: csv::Error| ScoreError::Write {
            path: out_path.display().to_string(),
            message: e.to_string(),
        };

        let mut header: Vec<String> = vec![
            "Segment".to_string(),
            "Borrowability".to_string(),
            "PHOIBLE_frequency_absolute".to_string(),
            "PHOIBLE_frequency_relative".to_string(),
            "SEGBO_frequency_absolute".to_string(),
            "SEGBO_frequency_relative".to_string(),
        ];
        header.extend(features.columns.iter().cloned());
        writer.write_record(&header).map_err(write_err)?;

        let mut matched = 0usize;
        for entry in &self.entries {
            let mut record: Vec<String> = vec![
                entry.segment.to_string(),
                entry.borrowability.to_string(),
                entry.phoible_absolute.to_string(),
                entry.phoible_relative.to_string(),
                entry.segbo_absolute.to_string(),
                entry.segbo_relative.to_string(),
            ];
            match features.rows.get(&entry.segment) {
                Some(feature_row) => {
                    record.extend(feature_row.iter().map(str::to_string));
                    matched += 1;
                }
                None => {
                    record.extend(features.columns.iter().map(|_| String::new()));
                }
            }
            writer.write_record(&record).map_err(write_err)?;
        }

        writer.flush().map_err(|e| ScoreError::Write {
            path: out_path.display().to_string(),
            message: e.to_string(),
        })?;

        info!(
            matched,
            total = self.entries.len(),
            "wrote feature-merged borrowability table"
        );
        Ok(())
    }
}

/// The PHOIBLE feature table, keyed by the `Name` column.
struct FeatureTable {
    columns: Vec<String>,
    rows: FxHashMap<Segment, csv::StringRecord>,
}

fn read_feature_table(path: &Path) -> Result<FeatureTable, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| DatasetError::Csv {
            path: path.display().to_string(),
            message: e.to_string(),
        })?
        .clone();
    let name_idx = headers
        .iter()
        .position(|h| h == "Name")
        .ok_or_else(|| DatasetError::MissingColumn {
            path: path.display().to_string(),
            column: "Name".to_string(),
        })?;

    let mut rows = FxHashMap::default();
    for record in reader.records() {
        let record = record.map_err(|e| DatasetError::Csv {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(name) = record.get(name_idx) {
            rows.insert(Segment::from(name), record.clone());
        }
    }

    Ok(FeatureTable {
        columns: headers.iter().map(str::to_string).collect(),
        rows,
    })
}
