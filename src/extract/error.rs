// Mon Jan 19 2026 - Alex

use crate::layout::LayoutError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Unsupported field kind: {struct_name}.{field} ({type_name}) has no native representation")]
    UnsupportedFieldKind {
        struct_name: String,
        field: String,
        type_name: String,
    },
    #[error("Nested layout for {struct_name}.{field} failed: {source}")]
    NestedLayout {
        struct_name: String,
        field: String,
        #[source]
        source: LayoutError,
    },
}
