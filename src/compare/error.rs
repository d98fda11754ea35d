// Tue Jan 20 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("Field not found in actual layout: {struct_name}.{field}")]
    FieldNotFound { struct_name: String, field: String },
}
