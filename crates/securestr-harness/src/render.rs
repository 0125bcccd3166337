//! Fixed-label rendering of harness results as plain text.

use securestr_core::SecureStr;

use crate::{Outcome, RunOutput};

/// Text label for a result code: `PASS`, `FAIL`, `TRUE`, `FALSE`, `NPOS`,
/// a numeric position or size, or a quoted byte.
#[must_use]
pub fn outcome_label(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Pass => "PASS".to_string(),
        Outcome::Fail => "FAIL".to_string(),
        Outcome::True => "TRUE".to_string(),
        Outcome::False => "FALSE".to_string(),
        Outcome::Position(position) => position.to_string(),
        Outcome::NotFound => "NPOS".to_string(),
        Outcome::Size(size) => size.to_string(),
        Outcome::Byte(byte) => format!("'{}'", byte.escape_ascii()),
    }
}

/// One `label(content)` line, or the explicit null marker for an absent
/// buffer argument.
#[must_use]
pub fn buffer_line(label: &str, buffer: Option<&SecureStr>) -> String {
    match buffer {
        Some(s) => format!("{label}({})", String::from_utf8_lossy(s.as_bytes())),
        None => format!("{label} -> NULL"),
    }
}

/// Full plain-text block for a completed run: the call form with its result
/// label, then the final state of each buffer the operation consumed.
#[must_use]
pub fn render_text(run: &RunOutput) -> String {
    let mut out = format!(
        "{}: {}\n{}\n",
        run.operation.describe(),
        outcome_label(&run.outcome),
        buffer_line("string_A", run.string_a.as_ref()),
    );
    if run.operation.uses_string_b() {
        out.push_str(&buffer_line("string_B", run.string_b.as_ref()));
        out.push('\n');
    }
    out
}
