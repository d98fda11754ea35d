// Tue Jan 20 2026 - Alex

use crate::compare::ComparisonReport;
use crate::verify::outcome::TypeOutcome;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VerificationSummary {
    pub matched: usize,
    pub mismatched: usize,
    pub aborted: usize,
}

impl VerificationSummary {
    pub fn total(&self) -> usize {
        self.matched + self.mismatched + self.aborted
    }

    pub fn is_clean(&self) -> bool {
        self.mismatched == 0 && self.aborted == 0
    }

    fn record(&mut self, outcome: &TypeOutcome) {
        if outcome.is_match() {
            self.matched += 1;
        } else if outcome.is_mismatch() {
            self.mismatched += 1;
        } else {
            self.aborted += 1;
        }
    }
}

/// One aggregated report per catalog sweep: every type attempted, with a
/// summary suitable for a pass/fail test runner. One malformed declaration
/// never hides findings for the remaining types.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    outcomes: Vec<TypeOutcome>,
    summary: VerificationSummary,
}

impl VerificationReport {
    pub fn new() -> Self {
        Self {
            outcomes: Vec::new(),
            summary: VerificationSummary::default(),
        }
    }

    pub fn from_outcomes(outcomes: Vec<TypeOutcome>) -> Self {
        let mut report = Self::new();
        for outcome in outcomes {
            report.add_outcome(outcome);
        }
        report
    }

    pub fn add_outcome(&mut self, outcome: TypeOutcome) {
        self.summary.record(&outcome);
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[TypeOutcome] {
        &self.outcomes
    }

    pub fn summary(&self) -> VerificationSummary {
        self.summary
    }

    pub fn is_pass(&self) -> bool {
        self.summary.is_clean()
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &ComparisonReport> {
        self.outcomes.iter().filter_map(|o| match o {
            TypeOutcome::Verified { report } if !report.matches() => Some(report),
            _ => None,
        })
    }

    pub fn aborted(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes.iter().filter_map(|o| match o {
            TypeOutcome::Aborted { type_name, reason } => Some((type_name.as_str(), reason.as_str())),
            _ => None,
        })
    }

    pub fn format_report(&self) -> String {
        let mut output = String::new();

        output.push_str("=== Layout Verification Report ===\n");
        output.push_str(&format!("Types attempted: {}\n", self.summary.total()));
        output.push_str(&format!("  Matched:    {}\n", self.summary.matched));
        output.push_str(&format!("  Mismatched: {}\n", self.summary.mismatched));
        output.push_str(&format!("  Aborted:    {}\n", self.summary.aborted));

        if self.summary.mismatched > 0 {
            output.push_str("\n[MISMATCHES]\n");
            for report in self.mismatches().sorted_by_key(|r| r.struct_name()) {
                for m in report.offset_mismatches() {
                    output.push_str(&format!(
                        "  {}.{}: expected offset {}, actual {}\n",
                        report.struct_name(),
                        m.field,
                        m.expected,
                        m.actual
                    ));
                }
                if let Some(m) = report.size_mismatch() {
                    output.push_str(&format!(
                        "  {}: expected size {}, actual {}\n",
                        report.struct_name(),
                        m.expected,
                        m.actual
                    ));
                }
            }
        }

        if self.summary.aborted > 0 {
            output.push_str("\n[ABORTED]\n");
            for (type_name, reason) in self.aborted().sorted_by_key(|(name, _)| *name) {
                output.push_str(&format!("  {}: {}\n", type_name, reason));
            }
        }

        output
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for VerificationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{OffsetMismatch, SizeMismatch};

    #[test]
    fn test_summary_tracks_outcome_kinds() {
        let mut report = VerificationReport::new();

        report.add_outcome(TypeOutcome::Verified {
            report: ComparisonReport::new("Clean"),
        });

        let mut drifted = ComparisonReport::new("Drifted");
        drifted.add_offset_mismatch(OffsetMismatch {
            field: "x".to_string(),
            expected: 4,
            actual: 8,
        });
        drifted.set_size_mismatch(SizeMismatch { expected: 12, actual: 16 });
        report.add_outcome(TypeOutcome::Verified { report: drifted });

        report.add_outcome(TypeOutcome::Aborted {
            type_name: "Broken".to_string(),
            reason: "no native representation".to_string(),
        });

        let summary = report.summary();
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.mismatched, 1);
        assert_eq!(summary.aborted, 1);
        assert_eq!(summary.total(), 3);
        assert!(!report.is_pass());

        let text = report.format_report();
        assert!(text.contains("Drifted.x: expected offset 4, actual 8"));
        assert!(text.contains("Broken: no native representation"));
    }

    #[test]
    fn test_empty_report_passes() {
        let report = VerificationReport::new();
        assert!(report.is_pass());
        assert_eq!(report.summary().total(), 0);
    }
}
