//! Command line surface

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Normalizes trivial literal markup in C# XML documentation comments and
/// reports documentation smells.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct ToolOptions {
    /// File or directory to process. Directories are walked recursively
    /// for *.cs files, skipping bin, obj and .git.
    pub target: PathBuf,

    /// Report findings without rewriting or backing up any file.
    #[arg(long, default_value_t = false)]
    pub check_only: bool,

    /// Delete stale *.bak backup files under the target before running.
    #[arg(long, default_value_t = false)]
    pub clean_backups: bool,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    /// Output path for the json and sarif artifacts.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

/// Where findings go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per finding on stdout.
    Console,
    /// Aggregate JSON document.
    Json,
    /// SARIF 2.1.0 document for code scanning tools.
    Sarif,
}

/// Process exit codes. Clap itself exits with 2 on a parse error, so
/// InvalidArguments matches what callers already observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Findings = 1,
    InvalidArguments = 2,
    Fatal = 3,
}
