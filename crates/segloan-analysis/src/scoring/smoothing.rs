//! Baseline count correction and Laplace smoothing.

use tracing::warn;

use segloan_core::types::collections::FxHashMap;
use segloan_core::types::Segment;

/// Corrected baseline counts for every borrowed segment, in both
/// smoothing variants.
#[derive(Debug, Clone)]
pub struct CorrectedBaseline {
    /// Raw variant: max(segbo_count, phoible_count) per segment.
    pub greater_or_equal: FxHashMap<Segment, u64>,
    /// Laplace variant: raw + 1 per segment.
    pub strictly_greater: FxHashMap<Segment, u64>,
}

/// Correct the PHOIBLE baseline counts against the SEGBO counts.
///
/// When a segment's borrowing count meets or exceeds its baseline count
/// the baseline is replaced by the borrowing count; otherwise the
/// interpretation of SEGBO as a subsample of the PHOIBLE population
/// breaks and relative frequencies exceed 1. Segments missing from
/// PHOIBLE count as 0 and always trigger the replacement.
///
/// The Laplace ("strictly greater") count is the corrected count + 1 in
/// every branch, which keeps the borrowability denominator away from 0.
pub fn correct_baseline(
    segbo_absolute: &FxHashMap<Segment, u64>,
    phoible_absolute: &FxHashMap<Segment, u64>,
) -> CorrectedBaseline {
    let mut greater_or_equal = FxHashMap::default();
    let mut strictly_greater = FxHashMap::default();

    for (segment, &count_segbo) in segbo_absolute {
        let count_phoible = phoible_absolute.get(segment).copied().unwrap_or(0);
        if count_segbo >= count_phoible {
            warn!(
                segment = %segment,
                segbo = count_segbo,
                phoible = count_phoible,
                "borrowing count exceeds baseline, replacing baseline"
            );
            greater_or_equal.insert(segment.clone(), count_segbo);
            strictly_greater.insert(segment.clone(), count_segbo + 1);
        } else {
            greater_or_equal.insert(segment.clone(), count_phoible);
            strictly_greater.insert(segment.clone(), count_phoible + 1);
        }
    }

    CorrectedBaseline {
        greater_or_equal,
        strictly_greater,
    }
}
