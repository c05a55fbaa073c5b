//! CLDF dataset loading and joining.

pub mod loader;
pub mod types;

pub use loader::load_cldf_dataset;
pub use types::{CldfDataset, JoinedRow, LanguageRow, ValueRow};
