// Mon Jan 19 2026 - Alex

use crate::layout::field::FieldSpec;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LayoutKind {
    Sequential,
    Explicit,
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutKind::Sequential => write!(f, "sequential"),
            LayoutKind::Explicit => write!(f, "explicit"),
        }
    }
}

/// An ordered field sequence plus the layout directives attached to the
/// declaring type. Immutable once built; construct through
/// [`StructSpecBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructSpec {
    name: String,
    kind: LayoutKind,
    pack: Option<usize>,
    declared_size: Option<usize>,
    fields: Vec<FieldSpec>,
}

impl StructSpec {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    pub fn pack(&self) -> Option<usize> {
        self.pack
    }

    pub fn declared_size(&self) -> Option<usize> {
        self.declared_size
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl fmt::Display for StructSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} layout, {} fields)", self.name, self.kind, self.fields.len())
    }
}

pub struct StructSpecBuilder {
    name: String,
    kind: LayoutKind,
    pack: Option<usize>,
    declared_size: Option<usize>,
    fields: Vec<FieldSpec>,
}

impl StructSpecBuilder {
    pub fn sequential(name: &str) -> Self {
        Self::with_kind(name, LayoutKind::Sequential)
    }

    pub fn explicit(name: &str) -> Self {
        Self::with_kind(name, LayoutKind::Explicit)
    }

    fn with_kind(name: &str, kind: LayoutKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            pack: None,
            declared_size: None,
            fields: Vec::new(),
        }
    }

    pub fn pack(mut self, pack: usize) -> Self {
        self.pack = Some(pack);
        self
    }

    pub fn declared_size(mut self, size: usize) -> Self {
        self.declared_size = Some(size);
        self
    }

    pub fn field(mut self, name: &str, size: usize, alignment: usize) -> Self {
        let index = self.fields.len();
        self.fields.push(FieldSpec::new(name, size, alignment, self.kind, None, index));
        self
    }

    pub fn field_at(mut self, name: &str, size: usize, alignment: usize, offset: i64) -> Self {
        let index = self.fields.len();
        self.fields.push(FieldSpec::new(name, size, alignment, self.kind, Some(offset), index));
        self
    }

    pub fn build(self) -> StructSpec {
        StructSpec {
            name: self.name,
            kind: self.kind,
            pack: self.pack,
            declared_size: self.declared_size,
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_assigns_indices_in_declaration_order() {
        let spec = StructSpecBuilder::sequential("Pair")
            .field("first", 4, 4)
            .field("second", 8, 8)
            .build();

        assert_eq!(spec.field_count(), 2);
        assert_eq!(spec.field("first").unwrap().index(), 0);
        assert_eq!(spec.field("second").unwrap().index(), 1);
        assert_eq!(spec.fields()[0].mode(), LayoutKind::Sequential);
    }

    #[test]
    fn test_builder_carries_layout_directives() {
        let spec = StructSpecBuilder::explicit("Raw")
            .pack(4)
            .declared_size(16)
            .field_at("lo", 4, 4, 0)
            .build();

        assert_eq!(spec.kind(), LayoutKind::Explicit);
        assert_eq!(spec.pack(), Some(4));
        assert_eq!(spec.declared_size(), Some(16));
        assert_eq!(spec.fields()[0].offset(), Some(0));
    }
}
