//! End-to-end tests: model run and correlation over fixture CLDF tables.
//!
//! Fixture layout (6 PHOIBLE languages l1–l6):
//!   PHOIBLE inventories: p in l1–l4, t in l1–l3, k in l1–l2, f in l1,
//!   s in l5–l6.
//!   SEGBO events: f borrowed into l1 (twice), l2, l3; k into l1, l2;
//!   p into l1; z into l9 (l9 absent from PHOIBLE, dropped).
//!
//! Hand-computed expectations:
//!   corrected baselines: f: 3 ≥ 1 → 3 (Laplace 4); k: 2 ≥ 2 → 2 (3);
//!   p: 1 < 4 → 4 (5).
//!   raw scores over n = 6: f = 2.0, k = 1.5, p = 0.75.
//!   Laplace scores: f = 2.25, k = 4/3, p = 1.2.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use segloan_analysis::correlation::run_correlation;
use segloan_analysis::scoring::run_model;
use segloan_core::config::SegloanConfig;
use segloan_core::errors::PipelineError;
use segloan_core::types::Segment;

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

/// Build a config pointing every path into `dir`, with fixtures written.
fn fixture_config(dir: &tempfile::TempDir) -> SegloanConfig {
    let mut config = SegloanConfig::default();

    config.data.phoible_values = write_file(
        dir,
        "phoible_values.csv",
        "ID,Language_ID,Value\n\
         1,l1,p\n2,l2,p\n3,l3,p\n4,l4,p\n\
         5,l1,t\n6,l2,t\n7,l3,t\n\
         8,l1,k\n9,l2,k\n\
         10,l1,f\n\
         11,l5,s\n12,l6,s\n",
    );
    config.data.phoible_languages = write_file(
        dir,
        "phoible_languages.csv",
        "ID,Name\nl1,L One\nl2,L Two\nl3,L Three\nl4,L Four\nl5,L Five\nl6,L Six\n",
    );
    config.data.segbo_values = write_file(
        dir,
        "segbo_values.csv",
        "ID,Language_ID,Value\n\
         1,l1,f\n2,l1,f\n3,l2,f\n4,l3,f\n\
         5,l1,k\n6,l2,k\n\
         7,l1,p\n\
         8,l9,z\n",
    );
    config.data.segbo_languages = write_file(
        dir,
        "segbo_languages.csv",
        "ID,Name\nl1,L One\nl2,L Two\nl3,L Three\nl9,L Nine\n",
    );
    config.data.phoible_parameters = write_file(
        dir,
        "parameters.csv",
        "ID,Name,SegmentClass\n1,p,consonant\n2,t,consonant\n3,k,consonant\n4,f,consonant\n",
    );
    config.data.graph_model = write_file(
        dir,
        "graph_model.csv",
        "Phoneme,Borrowability\nf,3.0\nk,2.0\np,0.5\nx,9.9\n",
    );

    config.data.borrowability_out = dir.path().join("borrowability.csv");
    config.data.borrowability_laplace_out = dir.path().join("borrowability_laplace.csv");
    config.data.borrowability_with_features_out =
        dir.path().join("borrowability_w_features.csv");

    // Fixture counts are tiny; keep every borrowed segment.
    config.analysis.min_borrowing_count = Some(1);

    config
}

#[test]
fn test_model_run_scores_and_order() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = fixture_config(&dir);

    let output = run_model(&config).unwrap();

    let raw: Vec<&str> = output
        .raw
        .entries()
        .iter()
        .map(|e| e.segment.as_str())
        .collect();
    assert_eq!(raw, vec!["f", "k", "p"]);

    let f = &output.raw.entries()[0];
    assert!((f.borrowability - 2.0).abs() < 1e-12);
    assert_eq!(f.phoible_absolute, 3); // corrected: segbo 3 ≥ phoible 1
    assert_eq!(f.segbo_absolute, 3); // inventory-collapsed, not 4 events
    assert!((f.segbo_relative - 0.5).abs() < 1e-12); // 3 / 6 PHOIBLE inventories

    let p = &output.raw.entries()[2];
    assert!((p.borrowability - 0.75).abs() < 1e-12);
    assert_eq!(p.phoible_absolute, 4); // baseline kept, 1 < 4

    // The dropped l9 event must not leak into the counts.
    assert!(output
        .raw
        .entries()
        .iter()
        .all(|e| e.segment.as_str() != "z"));
}

#[test]
fn test_laplace_counts_are_raw_plus_one() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = fixture_config(&dir);

    let output = run_model(&config).unwrap();

    for raw_entry in output.raw.entries() {
        let laplace_entry = output
            .laplace
            .entries()
            .iter()
            .find(|e| e.segment == raw_entry.segment)
            .unwrap();
        assert_eq!(laplace_entry.phoible_absolute, raw_entry.phoible_absolute + 1);
        // SEGBO frequencies are shared between the variants.
        assert_eq!(laplace_entry.segbo_absolute, raw_entry.segbo_absolute);
    }

    let f = output
        .laplace
        .entries()
        .iter()
        .find(|e| e.segment == Segment::from("f"))
        .unwrap();
    assert!((f.borrowability - 2.25).abs() < 1e-12);
}

#[test]
fn test_model_run_writes_all_three_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = fixture_config(&dir);

    run_model(&config).unwrap();

    let plain = std::fs::read_to_string(&config.data.borrowability_out).unwrap();
    assert_eq!(plain.lines().count(), 4); // header + f, k, p
    assert!(plain.lines().nth(1).unwrap().starts_with("f,2.0,3,"));

    let laplace =
        std::fs::read_to_string(&config.data.borrowability_laplace_out).unwrap();
    assert_eq!(laplace.lines().count(), 4);

    let merged =
        std::fs::read_to_string(&config.data.borrowability_with_features_out).unwrap();
    // All three scored segments have feature rows.
    assert_eq!(merged.lines().count(), 4);
    assert!(merged.lines().next().unwrap().ends_with("ID,Name,SegmentClass"));
}

#[test]
fn test_correlation_end_to_end() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = fixture_config(&dir);

    run_model(&config).unwrap();
    let report = run_correlation(&config).unwrap();

    let segments: Vec<&str> = report.segments.iter().map(Segment::as_str).collect();
    assert_eq!(segments, vec!["f", "k", "p"]);

    // Event counts 4, 2, 1 track both models' score order, so both
    // correlations are strongly positive.
    assert!(report.model_1.correlation > 0.9);
    assert!(report.model_2.correlation > 0.9);
    assert!((0.0..=1.0).contains(&report.model_1.p_value));
    assert!((0.0..=1.0).contains(&report.model_2.p_value));
}

#[test]
fn test_correlation_threshold_filters_segments() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut config = fixture_config(&dir);

    run_model(&config).unwrap();

    // Only "f" has ≥ 3 borrowing events; one segment cannot correlate.
    config.analysis.min_borrowing_count = Some(3);
    let result = run_correlation(&config);
    assert!(matches!(
        result,
        Err(PipelineError::Correlation(_))
    ));
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut config = fixture_config(&dir);
    config.data.phoible_values = dir.path().join("does_not_exist.csv");

    let result = run_model(&config);
    assert!(matches!(result, Err(PipelineError::Dataset(_))));
}
