// Mon Jan 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid pack value: {0} (expected one of 1, 2, 4, 8, 16)")]
    InvalidPackValue(usize),
    #[error("Negative offset on field '{field}': {offset}")]
    NegativeOffset { field: String, offset: i64 },
    #[error("Missing explicit offset on field '{0}'")]
    MissingExplicitOffset(String),
}
