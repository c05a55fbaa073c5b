//! Three-way model comparison against SEGBO borrowing frequencies.

use std::fs::File;
use std::path::Path;

use tracing::{debug, info};

use segloan_core::config::SegloanConfig;
use segloan_core::errors::{CorrelationError, DatasetError, PipelineError};
use segloan_core::types::collections::{FxHashMap, FxHashSet};
use segloan_core::types::Segment;

use super::pearson::{pearson, PearsonResult};

/// The correlation of each borrowability model with the SEGBO
/// borrowing-event frequencies.
#[derive(Debug, Clone)]
pub struct CorrelationReport {
    /// Segments shared by all three tables, sorted.
    pub segments: Vec<Segment>,
    /// This repository's frequency-ratio model.
    pub model_1: PearsonResult,
    /// The external neighbor-graph model.
    pub model_2: PearsonResult,
}

/// Run the correlation check end to end.
///
/// Counts raw borrowing events per segment in SEGBO (per record, not
/// inventory-collapsed), keeps segments with at least
/// `min_borrowing_count` events, loads both model tables, intersects the
/// three key sets, and correlates the SEGBO frequency vector with each
/// model's borrowability vector.
pub fn run_correlation(config: &SegloanConfig) -> Result<CorrelationReport, PipelineError> {
    let data = &config.data;
    let min_count = config.analysis.effective_min_borrowing_count();

    let mut event_counts = borrowing_event_counts(&data.segbo_values)?;
    event_counts.retain(|_, count| *count >= min_count);
    debug!(
        segments = event_counts.len(),
        min_count, "frequently borrowed segments"
    );

    let model_1 = load_model_table(&data.borrowability_out, "Segment")?;
    let model_2 = load_model_table(&data.graph_model, "Phoneme")?;

    // Intersection of all three key sets, sorted for determinism.
    let keys_1: FxHashSet<&Segment> = model_1.keys().collect();
    let keys_2: FxHashSet<&Segment> = model_2.keys().collect();
    let mut segments: Vec<Segment> = event_counts
        .keys()
        .filter(|segment| keys_1.contains(segment) && keys_2.contains(segment))
        .cloned()
        .collect();
    segments.sort();

    if segments.is_empty() {
        return Err(CorrelationError::EmptyIntersection.into());
    }
    info!(segments = segments.len(), "segments common to all three tables");

    let segbo_vector: Vec<f64> = segments
        .iter()
        .map(|s| event_counts[s] as f64)
        .collect();
    let model_1_vector: Vec<f64> = segments.iter().map(|s| model_1[s]).collect();
    let model_2_vector: Vec<f64> = segments.iter().map(|s| model_2[s]).collect();

    let model_1 = pearson(&segbo_vector, &model_1_vector)?;
    let model_2 = pearson(&segbo_vector, &model_2_vector)?;

    Ok(CorrelationReport {
        segments,
        model_1,
        model_2,
    })
}

/// Count borrowing events per segment: one per SEGBO value row, no
/// inventory collapsing.
pub fn borrowing_event_counts(path: &Path) -> Result<FxHashMap<Segment, u64>, DatasetError> {
    let (headers, records) = read_records(path)?;
    let value_idx = column_index(&headers, "Value", path)?;

    let mut counts: FxHashMap<Segment, u64> = FxHashMap::default();
    for record in &records {
        if let Some(value) = record.get(value_idx) {
            if !value.is_empty() {
                *counts.entry(Segment::from(value)).or_insert(0) += 1;
            }
        }
    }
    Ok(counts)
}

/// Load a borrowability table keyed by `key_column`, dropping rows whose
/// `Borrowability` field is empty or not a finite number.
pub fn load_model_table(
    path: &Path,
    key_column: &str,
) -> Result<FxHashMap<Segment, f64>, DatasetError> {
    let (headers, records) = read_records(path)?;
    let key_idx = column_index(&headers, key_column, path)?;
    let score_idx = column_index(&headers, "Borrowability", path)?;

    let mut table: FxHashMap<Segment, f64> = FxHashMap::default();
    for record in &records {
        let (Some(key), Some(raw_score)) = (record.get(key_idx), record.get(score_idx))
        else {
            continue;
        };
        match raw_score.parse::<f64>() {
            Ok(score) if score.is_finite() => {
                table.insert(Segment::from(key), score);
            }
            _ => {} // missing borrowability, row dropped
        }
    }
    Ok(table)
}

fn read_records(
    path: &Path,
) -> Result<(csv::StringRecord, Vec<csv::StringRecord>), DatasetError> {
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
    let records = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DatasetError::Csv {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    Ok((headers, records))
}

fn column_index(
    headers: &csv::StringRecord,
    column: &str,
    path: &Path,
) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| DatasetError::MissingColumn {
            path: path.display().to_string(),
            column: column.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_event_counts_do_not_collapse() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "values.csv",
            "ID,Language_ID,Value\n1,l1,f\n2,l1,f\n3,l2,f\n4,l2,g\n",
        );
        let counts = borrowing_event_counts(&path).unwrap();
        // Two events in l1 both count; inventory collapsing would give 2.
        assert_eq!(counts[&Segment::from("f")], 3);
        assert_eq!(counts[&Segment::from("g")], 1);
    }

    #[test]
    fn test_model_table_drops_missing_borrowability() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "model.csv",
            "Phoneme,Borrowability\nf,0.5\ng,\nh,NaN\nj,0.25\n",
        );
        let table = load_model_table(&path, "Phoneme").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[&Segment::from("f")], 0.5);
        assert_eq!(table[&Segment::from("j")], 0.25);
    }

    #[test]
    fn test_model_table_missing_key_column() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_csv(&dir, "model.csv", "Segment,Borrowability\nf,0.5\n");
        let result = load_model_table(&path, "Phoneme");
        assert!(matches!(result, Err(DatasetError::MissingColumn { .. })));
    }
}
