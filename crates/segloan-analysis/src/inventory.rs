//! Inventory collapsing and segment frequencies.
//!
//! A language's inventory is the set of distinct segments attested for it.
//! Absolute frequency of a segment = number of inventories containing it;
//! relative frequency = absolute / number of inventories.

use tracing::info;

use segloan_core::types::collections::{FxHashMap, FxHashSet};
use segloan_core::types::{LanguageId, Segment};

use crate::dataset::CldfDataset;

/// Per-language segment sets.
pub type Inventories = FxHashMap<LanguageId, FxHashSet<Segment>>;

/// Absolute and relative segment frequencies over a set of inventories.
///
/// A segment attested in zero inventories is absent from both maps,
/// never present with 0.
#[derive(Debug, Clone)]
pub struct SegmentFrequencies {
    pub absolute: FxHashMap<Segment, u64>,
    pub relative: FxHashMap<Segment, f64>,
    /// The denominator used for relative frequencies.
    pub total_inventories: usize,
}

impl SegmentFrequencies {
    /// Derive relative frequencies from absolute counts over `total`
    /// inventories.
    ///
    /// `total` is a parameter rather than the map's own language count:
    /// SEGBO frequencies are normalized over the PHOIBLE inventory count.
    pub fn from_absolute(absolute: FxHashMap<Segment, u64>, total: usize) -> Self {
        let relative = absolute
            .iter()
            .map(|(segment, &count)| (segment.clone(), count as f64 / total as f64))
            .collect();
        Self {
            absolute,
            relative,
            total_inventories: total,
        }
    }
}

/// Collapse value rows into per-language inventories.
/// Rows with an empty `Language_ID` are skipped; duplicate observations
/// of a segment collapse via set semantics.
pub fn collapse_inventories(dataset: &CldfDataset) -> Inventories {
    let mut inventories: Inventories = FxHashMap::default();
    for row in &dataset.rows {
        if let Some(language_id) = &row.value.language_id {
            inventories
                .entry(language_id.clone())
                .or_default()
                .insert(row.value.value.clone());
        }
    }
    info!("{} languages", inventories.len());
    inventories
}

/// Count, for each segment, the number of inventories containing it.
pub fn absolute_frequencies(inventories: &Inventories) -> FxHashMap<Segment, u64> {
    let mut absolute: FxHashMap<Segment, u64> = FxHashMap::default();
    for segments in inventories.values() {
        for segment in segments {
            *absolute.entry(segment.clone()).or_insert(0) += 1;
        }
    }
    absolute
}

/// Collapse a dataset and compute its segment frequencies, normalized
/// over its own inventory count.
pub fn segment_frequencies(dataset: &CldfDataset) -> SegmentFrequencies {
    let inventories = collapse_inventories(dataset);
    let total = inventories.len();
    SegmentFrequencies::from_absolute(absolute_frequencies(&inventories), total)
}
