// Mon Jan 19 2026 - Alex

use crate::layout::alignment::Alignment;
use crate::layout::error::LayoutError;
use crate::layout::result::{FieldOverlap, LayoutResult, PaddingRegion};
use crate::layout::spec::{LayoutKind, StructSpec};
use indexmap::IndexMap;

/// Computes the offsets, padding and total size a native compiler would
/// assign to a [`StructSpec`]. Pure: the result depends only on the spec.
pub struct LayoutComputer;

impl LayoutComputer {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, spec: &StructSpec) -> Result<LayoutResult, LayoutError> {
        if let Some(pack) = spec.pack() {
            if !Alignment::is_valid_pack(pack) {
                return Err(LayoutError::InvalidPackValue(pack));
            }
        }

        match spec.kind() {
            LayoutKind::Sequential => self.compute_sequential(spec),
            LayoutKind::Explicit => self.compute_explicit(spec),
        }
    }

    fn compute_sequential(&self, spec: &StructSpec) -> Result<LayoutResult, LayoutError> {
        let mut offsets = IndexMap::with_capacity(spec.field_count());
        let mut padding = Vec::new();
        let mut cursor = 0usize;
        let mut max_alignment = 1usize;

        for field in spec.fields() {
            let effective = field.effective_alignment(spec.pack());
            let aligned = Alignment::new(effective).align_up(cursor);
            if aligned > cursor {
                padding.push(PaddingRegion { offset: cursor, len: aligned - cursor });
            }
            offsets.insert(field.name().to_string(), aligned);
            cursor = aligned + field.size();
            max_alignment = max_alignment.max(effective);
        }

        let alignment = Alignment::new(max_alignment);
        let size = alignment.align_up(cursor);
        if size > cursor {
            padding.push(PaddingRegion { offset: cursor, len: size - cursor });
        }

        Ok(LayoutResult::new(spec.name(), size, alignment, offsets, padding, Vec::new()))
    }

    fn compute_explicit(&self, spec: &StructSpec) -> Result<LayoutResult, LayoutError> {
        let mut offsets = IndexMap::with_capacity(spec.field_count());
        let mut ranges: Vec<(usize, usize, String)> = Vec::with_capacity(spec.field_count());
        let mut max_end = 0usize;
        let mut max_alignment = 1usize;

        for field in spec.fields() {
            let declared = field
                .offset()
                .ok_or_else(|| LayoutError::MissingExplicitOffset(field.name().to_string()))?;
            if declared < 0 {
                return Err(LayoutError::NegativeOffset {
                    field: field.name().to_string(),
                    offset: declared,
                });
            }

            let offset = declared as usize;
            offsets.insert(field.name().to_string(), offset);
            ranges.push((offset, offset + field.size(), field.name().to_string()));
            max_end = max_end.max(offset + field.size());
            max_alignment = max_alignment.max(field.effective_alignment(spec.pack()));
        }

        let size = spec.declared_size().unwrap_or(max_end);
        let overlaps = Self::find_overlaps(&ranges);
        let padding = Self::find_gaps(&ranges, size);

        Ok(LayoutResult::new(
            spec.name(),
            size,
            Alignment::new(max_alignment),
            offsets,
            padding,
            overlaps,
        ))
    }

    fn find_overlaps(ranges: &[(usize, usize, String)]) -> Vec<FieldOverlap> {
        let mut overlaps = Vec::new();
        for i in 0..ranges.len() {
            for j in (i + 1)..ranges.len() {
                let (start_a, end_a, ref name_a) = ranges[i];
                let (start_b, end_b, ref name_b) = ranges[j];
                let start = start_a.max(start_b);
                let end = end_a.min(end_b);
                if start < end {
                    overlaps.push(FieldOverlap {
                        first: name_a.clone(),
                        second: name_b.clone(),
                        offset: start,
                        len: end - start,
                    });
                }
            }
        }
        overlaps
    }

    fn find_gaps(ranges: &[(usize, usize, String)], size: usize) -> Vec<PaddingRegion> {
        let mut sorted: Vec<(usize, usize)> = ranges.iter().map(|r| (r.0, r.1)).collect();
        sorted.sort_unstable();

        let mut gaps = Vec::new();
        let mut covered = 0usize;
        for (start, end) in sorted {
            if start > covered {
                gaps.push(PaddingRegion { offset: covered, len: start - covered });
            }
            covered = covered.max(end);
        }
        if covered < size {
            gaps.push(PaddingRegion { offset: covered, len: size - covered });
        }
        gaps
    }
}

impl Default for LayoutComputer {
    fn default() -> Self {
        Self::new()
    }
}
