// Mon Jan 19 2026 - Alex

#![allow(dead_code)]

pub mod bindings;
pub mod catalog;
pub mod compare;
pub mod extract;
pub mod layout;
pub mod output;
pub mod utils;
pub mod verify;

pub use catalog::{CatalogEntry, NativeStruct, StructCatalog};
pub use compare::{ActualLayout, CompareError, ComparisonReport, NativeLayoutComparator};
pub use extract::{DeclType, ExtractError, FieldDecl, FieldExtractor, NativeType, StructDecl};
pub use layout::{
    FieldSpec, LayoutComputer, LayoutError, LayoutKind, LayoutResult, StructSpec,
    StructSpecBuilder,
};
pub use output::JsonSerializer;
pub use verify::{StructVerifier, TypeOutcome, VerificationReport, VerifyError};
