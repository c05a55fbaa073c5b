//! CSV reading and the values↔languages left join.

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use segloan_core::errors::DatasetError;
use segloan_core::types::collections::FxHashMap;
use segloan_core::types::LanguageId;

use super::types::{CldfDataset, JoinedRow, LanguageRow, ValueRow};

/// Load a CLDF dataset: read both tables and left-join value rows with
/// language rows on `Language_ID = ID`.
///
/// A missing file or malformed CSV is fatal; there is no recovery path.
pub fn load_cldf_dataset(
    values_path: &Path,
    languages_path: &Path,
) -> Result<CldfDataset, DatasetError> {
    let values: Vec<ValueRow> =
        read_table(values_path, &["Language_ID", "Value"])?;
    let languages: Vec<LanguageRow> = read_table(languages_path, &["ID"])?;

    let by_id: FxHashMap<LanguageId, LanguageRow> = languages
        .into_iter()
        .map(|lang| (lang.id.clone(), lang))
        .collect();

    let rows = values
        .into_iter()
        .map(|value| {
            let language = value
                .language_id
                .as_ref()
                .and_then(|id| by_id.get(id))
                .cloned();
            JoinedRow { value, language }
        })
        .collect::<Vec<_>>();

    debug!(
        values = rows.len(),
        languages = by_id.len(),
        path = %values_path.display(),
        "joined CLDF tables"
    );

    Ok(CldfDataset { rows })
}

/// Read a whole CSV table into typed rows, checking required columns
/// up front so schema mismatches report the column, not a serde detail.
pub(crate) fn read_table<T: DeserializeOwned>(
    path: &Path,
    required_columns: &[&str],
) -> Result<Vec<T>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(|e| DatasetError::Csv {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    for column in required_columns {
        if !headers.iter().any(|h| h == *column) {
            return Err(DatasetError::MissingColumn {
                path: path.display().to_string(),
                column: column.to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: T = record.map_err(|e| DatasetError::Csv {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(DatasetError::Empty {
            path: path.display().to_string(),
        });
    }

    Ok(rows)
}
