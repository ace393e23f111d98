//! Normalizer for C# XML documentation comments.
//!
//! Parses C# sources with tree-sitter, extracts the documentation blocks
//! attached to declarations, rewrites trivial literal markup in place and
//! reports documentation smells through pluggable reporters.

pub mod checks;
pub mod cli;
pub mod error;
pub mod execution;
pub mod findings;
pub mod io;
pub mod logging;
pub mod reporting;
pub mod rewriting;
pub mod syntax;
