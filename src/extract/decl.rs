// Mon Jan 19 2026 - Alex

use crate::extract::native_type::NativeType;
use crate::layout::LayoutKind;
use std::fmt;

/// The declared type of one field, as the binding adapter reports it.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclType {
    Primitive(NativeType),
    Nested(Box<StructDecl>),
    /// A reference-only type with no blittable native form. Extraction
    /// rejects it; carrying it here lets the adapter stay total.
    Opaque(String),
}

impl fmt::Display for DeclType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclType::Primitive(ty) => write!(f, "{}", ty),
            DeclType::Nested(decl) => write!(f, "struct {}", decl.name()),
            DeclType::Opaque(name) => write!(f, "opaque {}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub name: String,
    pub ty: DeclType,
    pub offset: Option<i64>,
}

impl FieldDecl {
    pub fn new(name: &str, ty: DeclType) -> Self {
        Self {
            name: name.to_string(),
            ty,
            offset: None,
        }
    }

    pub fn at_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// An abstract structure declaration: the one-time snapshot of a binding
/// type's fields and layout attributes that the engine consumes instead of
/// live type-system queries.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    name: String,
    layout: LayoutKind,
    pack: Option<usize>,
    declared_size: Option<usize>,
    fields: Vec<FieldDecl>,
}

impl StructDecl {
    pub fn sequential(name: &str) -> Self {
        Self::with_layout(name, LayoutKind::Sequential)
    }

    pub fn explicit(name: &str) -> Self {
        Self::with_layout(name, LayoutKind::Explicit)
    }

    fn with_layout(name: &str, layout: LayoutKind) -> Self {
        Self {
            name: name.to_string(),
            layout,
            pack: None,
            declared_size: None,
            fields: Vec::new(),
        }
    }

    pub fn with_pack(mut self, pack: usize) -> Self {
        self.pack = Some(pack);
        self
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.declared_size = Some(size);
        self
    }

    pub fn prim(mut self, name: &str, ty: NativeType) -> Self {
        self.fields.push(FieldDecl::new(name, DeclType::Primitive(ty)));
        self
    }

    pub fn prim_at(mut self, name: &str, ty: NativeType, offset: i64) -> Self {
        self.fields.push(FieldDecl::new(name, DeclType::Primitive(ty)).at_offset(offset));
        self
    }

    pub fn nested(mut self, name: &str, decl: StructDecl) -> Self {
        self.fields.push(FieldDecl::new(name, DeclType::Nested(Box::new(decl))));
        self
    }

    pub fn nested_at(mut self, name: &str, decl: StructDecl, offset: i64) -> Self {
        self.fields
            .push(FieldDecl::new(name, DeclType::Nested(Box::new(decl))).at_offset(offset));
        self
    }

    pub fn opaque(mut self, name: &str, type_name: &str) -> Self {
        self.fields.push(FieldDecl::new(name, DeclType::Opaque(type_name.to_string())));
        self
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout(&self) -> LayoutKind {
        self.layout
    }

    pub fn pack(&self) -> Option<usize> {
        self.pack
    }

    pub fn declared_size(&self) -> Option<usize> {
        self.declared_size
    }

    pub fn fields(&self) -> &[FieldDecl] {
        &self.fields
    }
}

impl fmt::Display for StructDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} layout", self.name, self.layout)?;
        if let Some(pack) = self.pack {
            write!(f, ", pack {}", pack)?;
        }
        write!(f, ", {} fields)", self.fields.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decl_construction() {
        let decl = StructDecl::sequential("Vertex")
            .prim("x", NativeType::F32)
            .prim("y", NativeType::F32)
            .nested("color", StructDecl::sequential("Color").prim("r", NativeType::F32));

        assert_eq!(decl.fields().len(), 3);
        assert_eq!(decl.fields()[0].name, "x");
        assert!(matches!(decl.fields()[2].ty, DeclType::Nested(_)));
        assert_eq!(decl.layout(), LayoutKind::Sequential);
    }

    #[test]
    fn test_explicit_decl_carries_offsets() {
        let decl = StructDecl::explicit("Raw")
            .with_size(8)
            .prim_at("lo", NativeType::U32, 0)
            .prim_at("hi", NativeType::U32, 4);

        assert_eq!(decl.declared_size(), Some(8));
        assert_eq!(decl.fields()[1].offset, Some(4));
    }
}
