// Tue Jan 20 2026 - Alex

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OffsetMismatch {
    pub field: String,
    pub expected: usize,
    pub actual: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeMismatch {
    pub expected: usize,
    pub actual: usize,
}

/// The diff between a computed layout and the host-reported one. Empty
/// means the two layouts agree exactly; a populated report is a detected
/// drift, not a comparator failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonReport {
    struct_name: String,
    offset_mismatches: Vec<OffsetMismatch>,
    size_mismatch: Option<SizeMismatch>,
}

impl ComparisonReport {
    pub fn new(struct_name: &str) -> Self {
        Self {
            struct_name: struct_name.to_string(),
            offset_mismatches: Vec::new(),
            size_mismatch: None,
        }
    }

    pub fn add_offset_mismatch(&mut self, mismatch: OffsetMismatch) {
        self.offset_mismatches.push(mismatch);
    }

    pub fn set_size_mismatch(&mut self, mismatch: SizeMismatch) {
        self.size_mismatch = Some(mismatch);
    }

    pub fn struct_name(&self) -> &str {
        &self.struct_name
    }

    pub fn offset_mismatches(&self) -> &[OffsetMismatch] {
        &self.offset_mismatches
    }

    pub fn size_mismatch(&self) -> Option<&SizeMismatch> {
        self.size_mismatch.as_ref()
    }

    pub fn matches(&self) -> bool {
        self.offset_mismatches.is_empty() && self.size_mismatch.is_none()
    }

    pub fn finding_count(&self) -> usize {
        self.offset_mismatches.len() + usize::from(self.size_mismatch.is_some())
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matches() {
            return write!(f, "{}: layout matches", self.struct_name);
        }
        writeln!(f, "{}: {} finding(s)", self.struct_name, self.finding_count())?;
        for m in &self.offset_mismatches {
            writeln!(
                f,
                "  field {}: expected offset {}, actual {}",
                m.field, m.expected, m.actual
            )?;
        }
        if let Some(m) = &self.size_mismatch {
            writeln!(f, "  size: expected {}, actual {}", m.expected, m.actual)?;
        }
        Ok(())
    }
}
