//! Configuration system for Segloan.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod analysis_config;
pub mod data_config;
pub mod segloan_config;

pub use analysis_config::AnalysisConfig;
pub use data_config::DataConfig;
pub use segloan_config::SegloanConfig;
