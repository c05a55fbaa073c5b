//! The model run: load, restrict, count, correct, score, persist.

use tracing::info;

use segloan_core::config::SegloanConfig;
use segloan_core::errors::{PipelineError, ScoreError};
use segloan_core::types::Segment;

use crate::dataset::load_cldf_dataset;
use crate::inventory::{
    absolute_frequencies, collapse_inventories, SegmentFrequencies,
};

use super::score::borrowability_score;
use super::smoothing::correct_baseline;
use super::table::{BorrowabilityEntry, BorrowabilityTable};

/// The two tables produced by a model run.
#[derive(Debug, Clone)]
pub struct ModelOutput {
    pub raw: BorrowabilityTable,
    pub laplace: BorrowabilityTable,
}

/// Run the borrowability model end to end and write the result files.
///
/// Loads PHOIBLE and SEGBO, restricts SEGBO to PHOIBLE languages,
/// collapses inventories, applies the baseline correction, scores every
/// borrowed segment under both smoothing policies, and persists the raw
/// table (plain and feature-merged) plus the Laplace table.
pub fn run_model(config: &SegloanConfig) -> Result<ModelOutput, PipelineError> {
    let data = &config.data;
    let divide_by_six = config.analysis.effective_divide_by_six();

    let segbo = load_cldf_dataset(&data.segbo_values, &data.segbo_languages)?;
    let phoible = load_cldf_dataset(&data.phoible_values, &data.phoible_languages)?;

    let phoible_languages = phoible.language_ids();
    let n_phoible_inventories = phoible_languages.len();
    let segbo_languages = segbo.language_ids();
    info!(n_phoible_inventories, "PHOIBLE inventories");
    info!(n_segbo_languages = segbo_languages.len(), "SEGBO languages");
    info!(
        segbo_only = segbo_languages.difference(&phoible_languages).count(),
        "SEGBO languages missing from PHOIBLE"
    );

    // The borrowability denominator treats PHOIBLE as the population
    // sample; SEGBO languages outside it are dropped.
    let segbo = segbo.restrict_to(&phoible_languages);
    info!(
        n_segbo_languages = segbo.language_count(),
        "SEGBO languages after PHOIBLE restriction"
    );

    let phoible_absolute = absolute_frequencies(&collapse_inventories(&phoible));
    let segbo_absolute = absolute_frequencies(&collapse_inventories(&segbo));
    if segbo_absolute.is_empty() {
        return Err(ScoreError::NoBorrowedSegments.into());
    }

    // SEGBO relative frequencies are normalized over the PHOIBLE
    // inventory count, not SEGBO's own language count.
    let segbo_freqs =
        SegmentFrequencies::from_absolute(segbo_absolute, n_phoible_inventories);

    let corrected = correct_baseline(&segbo_freqs.absolute, &phoible_absolute);
    let phoible_raw = SegmentFrequencies::from_absolute(
        corrected.greater_or_equal.clone(),
        n_phoible_inventories,
    );
    let phoible_laplace = SegmentFrequencies::from_absolute(
        corrected.strictly_greater.clone(),
        n_phoible_inventories,
    );

    log_top_baseline_frequencies(&phoible_raw, &phoible_laplace, 10);

    let build = |baseline: &SegmentFrequencies| {
        let entries = segbo_freqs
            .relative
            .iter()
            .map(|(segment, &q_s)| {
                let f_s = baseline.relative[segment];
                BorrowabilityEntry {
                    segment: segment.clone(),
                    borrowability: borrowability_score(q_s, f_s, divide_by_six),
                    phoible_absolute: baseline.absolute[segment],
                    phoible_relative: f_s,
                    segbo_absolute: segbo_freqs.absolute[segment],
                    segbo_relative: q_s,
                }
            })
            .collect::<Vec<_>>();
        BorrowabilityTable::new(entries)
    };

    let raw = build(&phoible_raw);
    let laplace = build(&phoible_laplace);

    raw.log_slices(
        config.analysis.effective_report_high_threshold(),
        config.analysis.effective_report_low_threshold(),
        config.analysis.effective_report_cap(),
    );

    raw.write_plain(&data.borrowability_out)?;
    laplace.write_plain(&data.borrowability_laplace_out)?;
    raw.write_with_features(&data.phoible_parameters, &data.borrowability_with_features_out)?;

    Ok(ModelOutput { raw, laplace })
}

/// Log the ten segments with the highest corrected baseline relative
/// frequency, with their raw and Laplace values side by side.
fn log_top_baseline_frequencies(
    raw: &SegmentFrequencies,
    laplace: &SegmentFrequencies,
    count: usize,
) {
    let mut by_frequency: Vec<(&Segment, f64)> = raw
        .relative
        .iter()
        .map(|(segment, &f_s)| (segment, f_s))
        .collect();
    by_frequency.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    for (segment, f_s) in by_frequency.into_iter().take(count) {
        info!("{segment}: {f_s}, {}", laplace.relative[segment]);
    }
}
