//! Machine-readable run records.
//!
//! One harness invocation produces one [`RunRecord`], serialized as a JSON
//! document when the caller asks for machine-readable output.

use serde::{Deserialize, Serialize};

use crate::{RunOutput, render};

/// JSON document describing one completed harness run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Library version the run was produced with.
    pub version: String,
    /// The dispatched operation, in its call form.
    pub operation: String,
    /// Fixed result label, numeric position, or size.
    pub result: String,
    /// Failure detail when the core operation reported an error value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Final content of `string_A`; absent for the `=null` marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_a: Option<String>,
    /// Final content of `string_B`; absent for the `=null` marker or when
    /// the operation does not consume it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_b: Option<String>,
}

impl RunRecord {
    /// Builds the record for a completed run.
    #[must_use]
    pub fn from_run(run: &RunOutput) -> Self {
        Self {
            version: securestr_core::VERSION.to_string(),
            operation: run.operation.describe(),
            result: render::outcome_label(&run.outcome),
            error: run.error.map(|err| err.to_string()),
            string_a: run
                .string_a
                .as_ref()
                .map(|s| String::from_utf8_lossy(s.as_bytes()).into_owned()),
            string_b: run
                .string_b
                .as_ref()
                .map(|s| String::from_utf8_lossy(s.as_bytes()).into_owned()),
        }
    }

    /// Serializes the record as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a record back from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Operation, STR_CAPACITY, dispatch};
    use securestr_core::SecureStr;

    fn working(text: &[u8]) -> Option<SecureStr> {
        let mut s = SecureStr::with_capacity(STR_CAPACITY).unwrap();
        s.copy_from_bytes(text).unwrap();
        Some(s)
    }

    #[test]
    fn test_record_round_trip() {
        let run = dispatch(Operation::Cpy, working(b"hello"), working(b""));
        let record = RunRecord::from_run(&run);
        let parsed = RunRecord::from_json(&record.to_json().unwrap()).unwrap();
        assert_eq!(parsed.operation, "cpy(string_A, string_B)");
        assert_eq!(parsed.result, "PASS");
        assert_eq!(parsed.string_a.as_deref(), Some("hello"));
        assert_eq!(parsed.string_b.as_deref(), Some("hello"));
        assert_eq!(parsed.version, securestr_core::VERSION);
    }

    #[test]
    fn test_record_skips_absent_fields() {
        let run = dispatch(Operation::Clear, None, None);
        let record = RunRecord::from_run(&run);
        let json = record.to_json().unwrap();
        assert_eq!(record.result, "FAIL");
        assert!(!json.contains("string_a"));
        assert!(!json.contains("string_b"));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn test_record_carries_error_detail() {
        let mut small = SecureStr::with_capacity(2).unwrap();
        small.copy_from_bytes(b"ab").unwrap();
        let run = dispatch(Operation::Cpy, working(b"hello"), Some(small));
        let record = RunRecord::from_run(&run);
        assert_eq!(record.result, "FAIL");
        let detail = record.error.unwrap();
        assert!(detail.contains("free bytes"));
    }
}
