// Mon Jan 19 2026 - Alex

use crate::layout::alignment::Alignment;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaddingRegion {
    pub offset: usize,
    pub len: usize,
}

/// Two explicit fields sharing bytes. Informational only; deliberate
/// reinterpretation is a supported declaration pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOverlap {
    pub first: String,
    pub second: String,
    pub offset: usize,
    pub len: usize,
}

/// The layout the computer predicts for one struct: total size, struct
/// alignment, per-field offsets in declaration order, and the padding the
/// placement introduced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutResult {
    name: String,
    size: usize,
    alignment: Alignment,
    offsets: IndexMap<String, usize>,
    padding: Vec<PaddingRegion>,
    overlaps: Vec<FieldOverlap>,
}

impl LayoutResult {
    pub(crate) fn new(
        name: &str,
        size: usize,
        alignment: Alignment,
        offsets: IndexMap<String, usize>,
        padding: Vec<PaddingRegion>,
        overlaps: Vec<FieldOverlap>,
    ) -> Self {
        Self {
            name: name.to_string(),
            size,
            alignment,
            offsets,
            padding,
            overlaps,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn offsets(&self) -> &IndexMap<String, usize> {
        &self.offsets
    }

    pub fn offset_of(&self, field: &str) -> Option<usize> {
        self.offsets.get(field).copied()
    }

    pub fn padding(&self) -> &[PaddingRegion] {
        &self.padding
    }

    pub fn overlaps(&self) -> &[FieldOverlap] {
        &self.overlaps
    }

    pub fn total_padding(&self) -> usize {
        self.padding.iter().map(|p| p.len).sum()
    }

    pub fn has_overlaps(&self) -> bool {
        !self.overlaps.is_empty()
    }
}

impl fmt::Display for LayoutResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "struct {} {{", self.name)?;
        writeln!(f, "  // Size: {} bytes, alignment: {}", self.size, self.alignment)?;
        for (name, offset) in &self.offsets {
            writeln!(f, "  {} @ 0x{:X}", name, offset)?;
        }
        if !self.padding.is_empty() {
            writeln!(f, "  // Padding ({} bytes total):", self.total_padding())?;
            for region in &self.padding {
                writeln!(f, "  //   0x{:X} - 0x{:X} ({} bytes)", region.offset, region.offset + region.len, region.len)?;
            }
        }
        for overlap in &self.overlaps {
            writeln!(f, "  // Overlap: {} / {} @ 0x{:X} ({} bytes)", overlap.first, overlap.second, overlap.offset, overlap.len)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;

    #[test]
    fn test_result_lookup_and_padding_total() {
        let result = LayoutResult::new(
            "Sample",
            16,
            Alignment::new(4),
            indexmap! { "a".to_string() => 0, "b".to_string() => 4 },
            vec![PaddingRegion { offset: 1, len: 3 }, PaddingRegion { offset: 9, len: 3 }],
            Vec::new(),
        );

        assert_eq!(result.offset_of("a"), Some(0));
        assert_eq!(result.offset_of("b"), Some(4));
        assert_eq!(result.offset_of("missing"), None);
        assert_eq!(result.total_padding(), 6);
        assert!(!result.has_overlaps());
    }
}
