//! Typed rows for the CLDF tables Segloan consumes.

use serde::Deserialize;

use segloan_core::types::collections::FxHashSet;
use segloan_core::types::{LanguageId, Segment};

/// One row of a CLDF `values.csv`: a segment attested in a language.
///
/// `Language_ID` is occasionally empty in the wild; such rows survive
/// loading and drop out during inventory collapsing.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueRow {
    #[serde(rename = "Language_ID")]
    pub language_id: Option<LanguageId>,
    #[serde(rename = "Value")]
    pub value: Segment,
}

/// One row of a CLDF `languages.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageRow {
    #[serde(rename = "ID")]
    pub id: LanguageId,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Glottocode", default)]
    pub glottocode: Option<String>,
}

/// A value row left-joined with its language row.
/// `language` is `None` when no language row matched `Language_ID`.
#[derive(Debug, Clone)]
pub struct JoinedRow {
    pub value: ValueRow,
    pub language: Option<LanguageRow>,
}

/// An immutable snapshot of a joined CLDF dataset.
#[derive(Debug, Clone)]
pub struct CldfDataset {
    pub rows: Vec<JoinedRow>,
}

impl CldfDataset {
    /// Distinct non-empty language IDs attested in the value rows.
    pub fn language_ids(&self) -> FxHashSet<LanguageId> {
        self.rows
            .iter()
            .filter_map(|row| row.value.language_id.clone())
            .collect()
    }

    /// Number of distinct non-empty language IDs.
    pub fn language_count(&self) -> usize {
        self.language_ids().len()
    }

    /// Keep only rows whose language ID is in `keep`.
    ///
    /// Used to restrict SEGBO to languages attested in PHOIBLE; the
    /// borrowability denominator assumes the baseline sample is a
    /// superset.
    pub fn restrict_to(&self, keep: &FxHashSet<LanguageId>) -> CldfDataset {
        let rows = self
            .rows
            .iter()
            .filter(|row| {
                row.value
                    .language_id
                    .as_ref()
                    .is_some_and(|id| keep.contains(id))
            })
            .cloned()
            .collect();
        CldfDataset { rows }
    }
}
