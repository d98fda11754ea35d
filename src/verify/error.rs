// Tue Jan 20 2026 - Alex

use crate::compare::CompareError;
use crate::extract::ExtractError;
use crate::layout::LayoutError;
use thiserror::Error;

/// Any fatal condition while verifying one struct type. Fatal for that
/// type only; the catalog sweep continues past it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Compare(#[from] CompareError),
}
