// Tue Jan 20 2026 - Alex

use crate::compare::actual::ActualLayout;
use crate::compare::error::CompareError;
use crate::compare::report::{ComparisonReport, OffsetMismatch, SizeMismatch};
use crate::layout::LayoutResult;

/// Diffs a computed layout against the host-reported one. Two layouts are
/// equal iff every field offset and the total size match exactly. Errors
/// only on malformed input; mismatches are reported, not raised.
pub struct NativeLayoutComparator;

impl NativeLayoutComparator {
    pub fn new() -> Self {
        Self
    }

    pub fn compare(
        &self,
        computed: &LayoutResult,
        actual: &ActualLayout,
    ) -> Result<ComparisonReport, CompareError> {
        let mut report = ComparisonReport::new(computed.name());

        for (field, &expected) in computed.offsets() {
            let reported = actual.offset_of(field).ok_or_else(|| CompareError::FieldNotFound {
                struct_name: computed.name().to_string(),
                field: field.clone(),
            })?;
            if expected != reported {
                report.add_offset_mismatch(OffsetMismatch {
                    field: field.clone(),
                    expected,
                    actual: reported,
                });
            }
        }

        if computed.size() != actual.size() {
            report.set_size_mismatch(SizeMismatch {
                expected: computed.size(),
                actual: actual.size(),
            });
        }

        Ok(report)
    }
}

impl Default for NativeLayoutComparator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutComputer, StructSpecBuilder};

    fn computed_pair() -> LayoutResult {
        let spec = StructSpecBuilder::sequential("Pair")
            .field("a", 4, 4)
            .field("b", 4, 4)
            .build();
        LayoutComputer::new().compute(&spec).unwrap()
    }

    #[test]
    fn test_matching_layouts_produce_empty_report() {
        let computed = computed_pair();
        let actual = ActualLayout::new("Pair", 8).with_field("a", 0).with_field("b", 4);

        let report = NativeLayoutComparator::new().compare(&computed, &actual).unwrap();
        assert!(report.matches());
        assert_eq!(report.finding_count(), 0);
    }

    #[test]
    fn test_offset_mismatch_is_reported_not_raised() {
        let computed = computed_pair();
        let actual = ActualLayout::new("Pair", 8).with_field("a", 0).with_field("b", 6);

        let report = NativeLayoutComparator::new().compare(&computed, &actual).unwrap();
        assert!(!report.matches());
        assert_eq!(report.offset_mismatches().len(), 1);
        assert_eq!(report.offset_mismatches()[0].field, "b");
        assert_eq!(report.offset_mismatches()[0].expected, 4);
        assert_eq!(report.offset_mismatches()[0].actual, 6);
    }

    #[test]
    fn test_size_mismatch_is_reported() {
        let computed = computed_pair();
        let actual = ActualLayout::new("Pair", 12).with_field("a", 0).with_field("b", 4);

        let report = NativeLayoutComparator::new().compare(&computed, &actual).unwrap();
        let size = report.size_mismatch().unwrap();
        assert_eq!(size.expected, 8);
        assert_eq!(size.actual, 12);
    }

    #[test]
    fn test_missing_field_is_malformed_input() {
        let computed = computed_pair();
        let actual = ActualLayout::new("Pair", 8).with_field("a", 0);

        let err = NativeLayoutComparator::new().compare(&computed, &actual).unwrap_err();
        assert_eq!(
            err,
            CompareError::FieldNotFound {
                struct_name: "Pair".to_string(),
                field: "b".to_string(),
            }
        );
    }

    #[test]
    fn test_comparison_is_deterministic() {
        let computed = computed_pair();
        let actual = ActualLayout::new("Pair", 12).with_field("a", 2).with_field("b", 4);

        let comparator = NativeLayoutComparator::new();
        let first = comparator.compare(&computed, &actual).unwrap();
        let second = comparator.compare(&computed, &actual).unwrap();
        assert_eq!(first, second);
    }
}
