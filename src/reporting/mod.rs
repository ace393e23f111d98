//! Finding reporters
//!
//! Every output format sits behind the `FindingsReporter` trait. The
//! console reporter streams lines as files are reported; the JSON and
//! SARIF reporters accumulate findings in memory and write one aggregate
//! artifact in `complete`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::error::{NormalizerError, NormalizerResult};
use crate::findings::{Finding, SmellRegistry};

pub mod console;
pub mod json;
pub mod sarif;

pub use console::ConsoleFindingsReporter;
pub use json::JsonFindingsReporter;
pub use sarif::SarifFindingsReporter;

/// Sink for findings.
pub trait FindingsReporter {
    /// Called exactly once per processed file, in discovery order. An
    /// empty slice must not produce output of its own.
    fn report_file(&mut self, file_path: &str, findings: &[Finding]) -> NormalizerResult<()>;

    /// Called exactly once after the last file. Batch formats write
    /// their artifact here; failure to do so is fatal for the run.
    fn complete(&mut self) -> NormalizerResult<()>;
}

/// Builds the reporter for the requested format. A missing output path
/// falls back to the format's default artifact path.
pub fn create_reporter(
    format: OutputFormat,
    output_path: Option<PathBuf>,
    smells: &SmellRegistry,
) -> Box<dyn FindingsReporter> {
    let path = output_path.unwrap_or_else(|| default_output_path(format));
    match format {
        OutputFormat::Json => Box::new(JsonFindingsReporter::new(path)),
        OutputFormat::Sarif => Box::new(SarifFindingsReporter::new(path, smells.clone())),
        OutputFormat::Console => Box::new(ConsoleFindingsReporter::new()),
    }
}

/// Conventional artifact path for each format.
pub fn default_output_path(format: OutputFormat) -> PathBuf {
    match format {
        OutputFormat::Console => PathBuf::from("artifacts/findings.txt"),
        OutputFormat::Json => PathBuf::from("artifacts/findings.json"),
        OutputFormat::Sarif => PathBuf::from("artifacts/findings.sarif"),
    }
}

/// Writes an aggregate artifact, creating parent directories first.
pub(crate) fn write_artifact(path: &Path, payload: &str) -> NormalizerResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| NormalizerError::Report {
                message: format!("could not create {}", parent.display()),
                source: e,
            })?;
        }
    }
    fs::write(path, payload).map_err(|e| NormalizerError::Report {
        message: format!("could not write {}", path.display()),
        source: e,
    })
}
