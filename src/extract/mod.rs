// Mon Jan 19 2026 - Alex

pub mod decl;
pub mod error;
pub mod extractor;
pub mod native_type;

pub use decl::{DeclType, FieldDecl, StructDecl};
pub use error::ExtractError;
pub use extractor::FieldExtractor;
pub use native_type::NativeType;
