// Tue Jan 20 2026 - Alex

use crate::compare::ComparisonReport;
use serde::Serialize;
use std::fmt;

/// What happened to one struct type during the sweep. `Verified` covers
/// both clean and mismatched comparisons; `Aborted` records a declaration
/// the engine could not process at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeOutcome {
    Verified { report: ComparisonReport },
    Aborted { type_name: String, reason: String },
}

impl TypeOutcome {
    pub fn type_name(&self) -> &str {
        match self {
            TypeOutcome::Verified { report } => report.struct_name(),
            TypeOutcome::Aborted { type_name, .. } => type_name,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, TypeOutcome::Verified { report } if report.matches())
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, TypeOutcome::Verified { report } if !report.matches())
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, TypeOutcome::Aborted { .. })
    }
}

impl fmt::Display for TypeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeOutcome::Verified { report } if report.matches() => {
                write!(f, "[OK] {}", report.struct_name())
            }
            TypeOutcome::Verified { report } => {
                write!(f, "[MISMATCH] {} ({} finding(s))", report.struct_name(), report.finding_count())
            }
            TypeOutcome::Aborted { type_name, reason } => {
                write!(f, "[ABORTED] {}: {}", type_name, reason)
            }
        }
    }
}
