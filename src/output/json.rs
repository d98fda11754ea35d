// Wed Jan 21 2026 - Alex

use crate::verify::VerificationReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct JsonSerializer {
    pretty_print: bool,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self { pretty_print: true }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn serialize(&self, report: &VerificationReport) -> Result<String, OutputError> {
        let json = if self.pretty_print {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    pub fn serialize_to_file<P: AsRef<Path>>(
        &self,
        report: &VerificationReport,
        path: P,
    ) -> Result<(), OutputError> {
        let json = self.serialize(report)?;
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::ComparisonReport;
    use crate::verify::TypeOutcome;

    #[test]
    fn test_serialized_report_is_valid_json() {
        let mut report = VerificationReport::new();
        report.add_outcome(TypeOutcome::Verified {
            report: ComparisonReport::new("Color"),
        });
        report.add_outcome(TypeOutcome::Aborted {
            type_name: "Broken".to_string(),
            reason: "no native representation".to_string(),
        });

        let json = JsonSerializer::new().serialize(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["matched"], 1);
        assert_eq!(value["summary"]["aborted"], 1);
        assert_eq!(value["outcomes"].as_array().unwrap().len(), 2);
    }
}
