use std::process;

use clap::Parser;
use log::{debug, error};
use xmldoc_normalizer::cli::{ExitCode, ToolOptions};
use xmldoc_normalizer::error::NormalizerError;
use xmldoc_normalizer::execution;
use xmldoc_normalizer::findings::SmellRegistry;
use xmldoc_normalizer::logging;

fn main() {
    let options = ToolOptions::parse();

    // Initialize logging before anything else can fail
    if let Err(e) = logging::init_logger(options.verbose) {
        eprintln!("Failed to initialize logger: {}", e);
        process::exit(ExitCode::Fatal as i32);
    }

    debug!("Processing target: {}", options.target.display());

    let smells = SmellRegistry::new();
    let code = match execution::run(&options, &smells) {
        Ok(result) => {
            debug!(
                "Run complete: {} file(s) changed, {} finding(s)",
                result.changed_files, result.finding_count
            );
            if result.finding_count > 0 {
                ExitCode::Findings
            } else {
                ExitCode::Success
            }
        }
        Err(NormalizerError::TargetNotFound { path }) => {
            eprintln!("Target does not exist: {}", path.display());
            ExitCode::InvalidArguments
        }
        Err(e) => {
            error!("{e}");
            ExitCode::Fatal
        }
    };

    process::exit(code as i32);
}
