//! Top-level Segloan configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, DataConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SEGLOAN_*`)
/// 2. Project config (`segloan.toml` in the working directory)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SegloanConfig {
    pub data: DataConfig,
    pub analysis: AnalysisConfig,
}

impl SegloanConfig {
    /// Load configuration with 3-layer resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. Environment variables (`SEGLOAN_*`)
    /// 2. Project config (`segloan.toml` in `root`)
    /// 3. Compiled defaults
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("segloan.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &SegloanConfig) -> Result<(), ConfigError> {
        if let Some(min_count) = config.analysis.min_borrowing_count {
            if min_count == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.min_borrowing_count".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(cap) = config.analysis.report_cap {
            if cap == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.report_cap".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SegloanConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: SegloanConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` set them explicitly.
    fn merge(base: &mut SegloanConfig, other: &SegloanConfig) {
        // Paths: values differing from the compiled default were set
        // explicitly in the file.
        let default_data = DataConfig::default();
        macro_rules! merge_path {
            ($field:ident) => {
                if other.data.$field != default_data.$field {
                    base.data.$field = other.data.$field.clone();
                }
            };
        }
        merge_path!(segbo_values);
        merge_path!(segbo_languages);
        merge_path!(phoible_values);
        merge_path!(phoible_languages);
        merge_path!(phoible_parameters);
        merge_path!(borrowability_out);
        merge_path!(borrowability_laplace_out);
        merge_path!(borrowability_with_features_out);
        merge_path!(graph_model);

        // Analysis
        if other.analysis.divide_by_six.is_some() {
            base.analysis.divide_by_six = other.analysis.divide_by_six;
        }
        if other.analysis.min_borrowing_count.is_some() {
            base.analysis.min_borrowing_count = other.analysis.min_borrowing_count;
        }
        if other.analysis.report_high_threshold.is_some() {
            base.analysis.report_high_threshold = other.analysis.report_high_threshold;
        }
        if other.analysis.report_low_threshold.is_some() {
            base.analysis.report_low_threshold = other.analysis.report_low_threshold;
        }
        if other.analysis.report_cap.is_some() {
            base.analysis.report_cap = other.analysis.report_cap;
        }
    }

    /// Apply `SEGLOAN_*` environment variable overrides.
    /// An unparseable value is an error, not a silent fallback.
    fn apply_env_overrides(config: &mut SegloanConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("SEGLOAN_DIVIDE_BY_SIX") {
            let flag = val.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
                field: "SEGLOAN_DIVIDE_BY_SIX".to_string(),
                message: format!("expected true or false, got {val:?}"),
            })?;
            config.analysis.divide_by_six = Some(flag);
        }
        if let Ok(val) = std::env::var("SEGLOAN_MIN_BORROWING_COUNT") {
            let count = val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                field: "SEGLOAN_MIN_BORROWING_COUNT".to_string(),
                message: format!("expected an integer, got {val:?}"),
            })?;
            config.analysis.min_borrowing_count = Some(count);
        }
        Ok(())
    }
}
