//! Tests for the Segloan configuration system.

use std::sync::Mutex;

use segloan_core::config::SegloanConfig;
use segloan_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper: create a temporary directory.
fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all SEGLOAN_ env vars to prevent cross-test contamination.
fn clear_segloan_env_vars() {
    for key in ["SEGLOAN_DIVIDE_BY_SIX", "SEGLOAN_MIN_BORROWING_COUNT"] {
        std::env::remove_var(key);
    }
}

/// Env overrides the project file, which overrides defaults.
#[test]
fn test_three_layer_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_segloan_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("segloan.toml");
    std::fs::write(
        &project_toml,
        r#"
[analysis]
min_borrowing_count = 5
divide_by_six = true
"#,
    )
    .unwrap();

    std::env::set_var("SEGLOAN_MIN_BORROWING_COUNT", "20");

    let config = SegloanConfig::load(dir.path()).unwrap();

    // Env overrides project for min_borrowing_count
    assert_eq!(config.analysis.effective_min_borrowing_count(), 20);
    // Project overrides defaults for divide_by_six
    assert!(config.analysis.effective_divide_by_six());

    clear_segloan_env_vars();
}

/// Missing project file falls back to compiled defaults.
#[test]
fn test_missing_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_segloan_env_vars();

    let dir = tempdir();
    let config = SegloanConfig::load(dir.path()).unwrap();

    assert_eq!(config.analysis.effective_min_borrowing_count(), 10);
    assert!(!config.analysis.effective_divide_by_six());
    assert!(config.data.segbo_values.ends_with("segbo/cldf/values.csv"));
}

/// A malformed env override is rejected, not silently ignored.
#[test]
fn test_malformed_env_value_is_invalid() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_segloan_env_vars();

    std::env::set_var("SEGLOAN_MIN_BORROWING_COUNT", "ten");

    let dir = tempdir();
    let result = SegloanConfig::load(dir.path());
    match result {
        Err(ConfigError::InvalidValue { field, .. }) => {
            assert_eq!(field, "SEGLOAN_MIN_BORROWING_COUNT");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }

    clear_segloan_env_vars();
}

/// Path overrides in the project file survive the merge.
#[test]
fn test_data_path_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_segloan_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("segloan.toml"),
        r#"
[data]
segbo_values = "/srv/cldf/segbo/values.csv"
"#,
    )
    .unwrap();

    let config = SegloanConfig::load(dir.path()).unwrap();

    assert_eq!(
        config.data.segbo_values,
        std::path::PathBuf::from("/srv/cldf/segbo/values.csv")
    );
    // Untouched paths keep their defaults.
    assert!(config.data.phoible_values.ends_with("phoible/cldf/values.csv"));
}
