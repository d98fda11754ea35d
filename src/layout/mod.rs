// Mon Jan 19 2026 - Alex

pub mod alignment;
pub mod computer;
pub mod error;
pub mod field;
pub mod result;
pub mod spec;

pub use alignment::Alignment;
pub use computer::LayoutComputer;
pub use error::LayoutError;
pub use field::FieldSpec;
pub use result::{FieldOverlap, LayoutResult, PaddingRegion};
pub use spec::{LayoutKind, StructSpec, StructSpecBuilder};
