// Tue Jan 20 2026 - Alex

use indexmap::IndexMap;
use std::fmt;

/// The layout the host type system actually assigns to a declared struct:
/// its real total size and real field offsets. Adapters build this from
/// `std::mem::size_of` and `std::mem::offset_of!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActualLayout {
    name: String,
    size: usize,
    offsets: IndexMap<String, usize>,
}

impl ActualLayout {
    pub fn new(name: &str, size: usize) -> Self {
        Self {
            name: name.to_string(),
            size,
            offsets: IndexMap::new(),
        }
    }

    pub fn with_field(mut self, name: &str, offset: usize) -> Self {
        self.offsets.insert(name.to_string(), offset);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn offset_of(&self, field: &str) -> Option<usize> {
        self.offsets.get(field).copied()
    }

    pub fn field_count(&self) -> usize {
        self.offsets.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, usize)> {
        self.offsets.iter().map(|(name, &offset)| (name.as_str(), offset))
    }
}

impl fmt::Display for ActualLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes, {} fields)", self.name, self.size, self.offsets.len())
    }
}
