//! Console reporter
//!
//! Streams one stdout line per finding as files are reported. Stdout is
//! reserved for these lines; run diagnostics go to the stderr logger.

use std::io::{self, Write};

use crate::error::{NormalizerError, NormalizerResult};
use crate::findings::Finding;
use crate::reporting::FindingsReporter;

pub struct ConsoleFindingsReporter {
    out: Box<dyn Write>,
}

impl ConsoleFindingsReporter {
    pub fn new() -> Self {
        ConsoleFindingsReporter {
            out: Box::new(io::stdout()),
        }
    }

    /// Reporter writing to the given sink instead of stdout.
    pub fn with_writer(out: Box<dyn Write>) -> Self {
        ConsoleFindingsReporter { out }
    }

    fn format_line(finding: &Finding) -> String {
        let mut line = format!(
            "{} [{}|{}] [{},{}]",
            finding.file_path, finding.smell_id, finding.severity, finding.line, finding.column
        );
        if let Some(tag) = &finding.tag_name {
            line.push_str(&format!(" <{tag}>"));
        }
        line.push(' ');
        line.push_str(&finding.message);
        if let Some(snippet) = &finding.snippet {
            line.push_str(&format!(" | {snippet}"));
        }
        line
    }
}

impl Default for ConsoleFindingsReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl FindingsReporter for ConsoleFindingsReporter {
    fn report_file(&mut self, _file_path: &str, findings: &[Finding]) -> NormalizerResult<()> {
        for finding in findings {
            writeln!(self.out, "{}", Self::format_line(finding)).map_err(|e| {
                NormalizerError::Report {
                    message: "could not write finding to the console".to_string(),
                    source: e,
                }
            })?;
        }
        Ok(())
    }

    fn complete(&mut self) -> NormalizerResult<()> {
        self.out.flush().map_err(|e| NormalizerError::Report {
            message: "could not flush the console".to_string(),
            source: e,
        })
    }
}
