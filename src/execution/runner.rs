//! End-to-end pipeline over the discovered files
//!
//! Per file: read preserving encoding, parse, extract the model, rewrite
//! in fix mode, then always run the checks and forward the findings to
//! the reporter. Per-file failures skip that file; reporter failures are
//! fatal because CI consumes the artifact.

use std::path::Path;

use crate::checks;
use crate::cli::ToolOptions;
use crate::error::{NormalizerError, NormalizerResult};
use crate::findings::SmellRegistry;
use crate::io;
use crate::reporting::{self, FindingsReporter};
use crate::rewriting;
use crate::syntax::{CsParser, SourceFileModel, extract_file_model};

/// Aggregate of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunResult {
    pub changed_files: usize,
    pub finding_count: usize,
}

/// Processes the target end to end and returns the aggregate result.
pub fn run(options: &ToolOptions, smells: &SmellRegistry) -> NormalizerResult<RunResult> {
    if !options.target.exists() {
        return Err(NormalizerError::TargetNotFound {
            path: options.target.clone(),
        });
    }

    if options.clean_backups {
        let removed = io::clean_backups(&options.target)?;
        log::info!("removed {removed} stale backup file(s)");
    }

    let files = io::enumerate_cs_files(&options.target)?;
    log::info!(
        "processing {} file(s) under {}",
        files.len(),
        options.target.display()
    );

    let mut parser = CsParser::new()?;
    let mut reporter = reporting::create_reporter(options.format, options.output.clone(), smells);
    let mut result = RunResult::default();

    for path in &files {
        match process_file(path, options, smells, &mut parser, reporter.as_mut(), &mut result) {
            Ok(()) => {}
            Err(e @ NormalizerError::Report { .. }) => return Err(e),
            Err(e) => log::warn!("skipping {}: {e}", path.display()),
        }
    }

    reporter.complete()?;
    Ok(result)
}

fn process_file(
    path: &Path,
    options: &ToolOptions,
    smells: &SmellRegistry,
    parser: &mut CsParser,
    reporter: &mut dyn FindingsReporter,
    result: &mut RunResult,
) -> NormalizerResult<()> {
    let file_path = path.to_string_lossy().into_owned();
    log::debug!("processing {file_path}");

    let mut file = io::read_text(path)?;
    let mut model = parse_model(parser, &file.text, path)?;

    if !options.check_only && !model.has_malformed_docs() {
        if let Some(rewritten) = rewriting::rewrite(&file.text, &model.doc_blocks) {
            io::create_backup(path)?;
            io::write_text(path, &rewritten, file.encoding, file.has_bom)?;
            result.changed_files += 1;
            log::info!("normalized {file_path}");

            // checks run against what is now on disk
            file.text = rewritten;
            model = parse_model(parser, &file.text, path)?;
        }
    }

    let findings = checks::run_checks(&model, &file_path, &file.text, smells);
    result.finding_count += findings.len();
    reporter.report_file(&file_path, &findings)
}

fn parse_model(
    parser: &mut CsParser,
    text: &str,
    path: &Path,
) -> NormalizerResult<SourceFileModel> {
    let tree = parser.parse(text).ok_or_else(|| NormalizerError::Parse {
        file: path.to_path_buf(),
        message: "tree-sitter returned no tree".to_string(),
    })?;
    Ok(extract_file_model(&tree, text))
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
