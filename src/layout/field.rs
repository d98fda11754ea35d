// Mon Jan 19 2026 - Alex

use crate::layout::spec::LayoutKind;
use serde::Serialize;
use std::fmt;

/// One normalized structure member: resolved size and natural alignment,
/// the layout mode inherited from the owning struct, the declared offset
/// (Explicit mode only) and the declaration index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    name: String,
    size: usize,
    alignment: usize,
    mode: LayoutKind,
    offset: Option<i64>,
    index: usize,
}

impl FieldSpec {
    pub fn new(
        name: &str,
        size: usize,
        alignment: usize,
        mode: LayoutKind,
        offset: Option<i64>,
        index: usize,
    ) -> Self {
        Self {
            name: name.to_string(),
            size,
            alignment,
            mode,
            offset,
            index,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn alignment(&self) -> usize {
        self.alignment
    }

    pub fn mode(&self) -> LayoutKind {
        self.mode
    }

    pub fn offset(&self) -> Option<i64> {
        self.offset
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Alignment actually applied during placement: the natural alignment,
    /// capped by the pack override when one is in force.
    pub fn effective_alignment(&self, pack: Option<usize>) -> usize {
        let natural = self.alignment.max(1);
        match pack {
            Some(p) => natural.min(p),
            None => natural,
        }
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes, align {})", self.name, self.size, self.alignment)?;
        if let Some(offset) = self.offset {
            write!(f, " @ {}", offset)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_alignment_respects_pack() {
        let field = FieldSpec::new("x", 4, 4, LayoutKind::Sequential, None, 0);
        assert_eq!(field.effective_alignment(None), 4);
        assert_eq!(field.effective_alignment(Some(1)), 1);
        assert_eq!(field.effective_alignment(Some(2)), 2);
        assert_eq!(field.effective_alignment(Some(8)), 4);
    }
}
