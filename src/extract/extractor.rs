// Mon Jan 19 2026 - Alex

use crate::extract::decl::{DeclType, FieldDecl, StructDecl};
use crate::extract::error::ExtractError;
use crate::layout::{LayoutComputer, LayoutKind, StructSpec, StructSpecBuilder};

/// Turns a [`StructDecl`] into a normalized [`StructSpec`], resolving each
/// field's size and alignment. Nested composites are resolved by recursively
/// extracting and layout-computing the inner declaration.
pub struct FieldExtractor {
    computer: LayoutComputer,
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self {
            computer: LayoutComputer::new(),
        }
    }

    pub fn extract(&self, decl: &StructDecl) -> Result<StructSpec, ExtractError> {
        let mut builder = match decl.layout() {
            LayoutKind::Sequential => StructSpecBuilder::sequential(decl.name()),
            LayoutKind::Explicit => StructSpecBuilder::explicit(decl.name()),
        };
        if let Some(pack) = decl.pack() {
            builder = builder.pack(pack);
        }
        if let Some(size) = decl.declared_size() {
            builder = builder.declared_size(size);
        }

        for field in decl.fields() {
            let (size, alignment) = self.resolve(decl.name(), field)?;
            builder = match field.offset {
                Some(offset) => builder.field_at(&field.name, size, alignment, offset),
                None => builder.field(&field.name, size, alignment),
            };
        }

        Ok(builder.build())
    }

    fn resolve(&self, struct_name: &str, field: &FieldDecl) -> Result<(usize, usize), ExtractError> {
        match &field.ty {
            DeclType::Primitive(ty) => Ok((ty.size(), ty.alignment())),
            DeclType::Nested(inner) => {
                let spec = self.extract(inner)?;
                let layout = self.computer.compute(&spec).map_err(|source| {
                    ExtractError::NestedLayout {
                        struct_name: struct_name.to_string(),
                        field: field.name.clone(),
                        source,
                    }
                })?;
                Ok((layout.size(), layout.alignment().as_usize()))
            }
            DeclType::Opaque(type_name) => Err(ExtractError::UnsupportedFieldKind {
                struct_name: struct_name.to_string(),
                field: field.name.clone(),
                type_name: type_name.clone(),
            }),
        }
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}
