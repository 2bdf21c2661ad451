//! Audit orchestrator - parses and validates every line, tallying the results.

use std::fmt;

use thiserror::Error;

use crate::parser::{ParseError, parse_entry};
use crate::validator::validate_entry;

/// What to do when a line fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureMode {
    /// Abort the whole run on the first bad line.
    #[default]
    FailFast,
    /// Record bad lines in the report and keep going.
    CollectAll,
}

/// A line skipped under [`FailureMode::CollectAll`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based position in the input.
    pub line_number: usize,
    pub line: String,
    pub error: ParseError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// Every line examined, rejected ones included.
    pub total: usize,
    pub invalid: usize,
    pub valid: usize,
    pub rejected: Vec<RejectedLine>,
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total entries: {}", self.total)?;
        writeln!(f, "Invalid entries: {}", self.invalid)?;
        write!(f, "Valid entries: {}", self.valid)?;
        if !self.rejected.is_empty() {
            write!(f, "\nRejected entries: {}", self.rejected.len())?;
            for rejected in &self.rejected {
                write!(
                    f,
                    "\n  line {}: {}: {:?}",
                    rejected.line_number, rejected.error, rejected.line
                )?;
            }
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("line {line_number} rejected ({source}): {line:?}")]
    Parse {
        line_number: usize,
        line: String,
        #[source]
        source: ParseError,
    },
}

/// Audits `lines` in input order.
///
/// # Errors
///
/// Under [`FailureMode::FailFast`], returns [`AuditError::Parse`] for the
/// first line that does not parse. No partial report is produced.
pub fn audit_lines<S: AsRef<str>>(
    lines: &[S],
    mode: FailureMode,
) -> Result<AuditReport, AuditError> {
    let mut report = AuditReport::default();

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let line_number = index + 1;
        report.total += 1;

        match parse_entry(line) {
            Ok(entry) => {
                let valid = validate_entry(&entry);
                #[cfg(feature = "tracing")]
                tracing::debug!(line_number, ?entry, valid, "entry checked");
                if valid {
                    report.valid += 1;
                } else {
                    report.invalid += 1;
                }
            }
            Err(error) => match mode {
                FailureMode::FailFast => {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Fatal parse error on line {}: {}", line_number, error);
                    return Err(AuditError::Parse {
                        line_number,
                        line: line.to_string(),
                        source: error,
                    });
                }
                FailureMode::CollectAll => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Skipping line {}: {}", line_number, error);
                    report.rejected.push(RejectedLine {
                        line_number,
                        line: line.to_string(),
                        error,
                    });
                }
            },
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!(
        total = report.total,
        valid = report.valid,
        invalid = report.invalid,
        rejected = report.rejected.len(),
        "audit finished"
    );

    Ok(report)
}
