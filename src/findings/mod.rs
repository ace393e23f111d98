//! Finding model
//!
//! A finding is one reported documentation smell at a source location.
//! Detectors create findings from the registered smell definitions and
//! reporters serialize them, so this module is the shared vocabulary
//! between the two sides.

use serde::Serialize;
use std::fmt;

pub mod smells;

pub use smells::{Smell, SmellRegistry, ids};

/// Maximum number of characters kept in a finding snippet.
const MAX_SNIPPET_CHARS: usize = 160;

/// Severity attached to a finding. Copied from the smell definition at
/// creation time so a finding is self-contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Warning => write!(f, "Warning"),
            Severity::Note => write!(f, "Note"),
        }
    }
}

/// One reported documentation smell at a concrete source location.
///
/// Line and column are 1-based; column counts characters, not bytes.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub smell_id: String,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    pub file_path: String,
    pub line: u32,
    pub column: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl Finding {
    /// Creates a finding for `smell` at the given location, filling the
    /// message template with `args`.
    pub fn new(smell: &Smell, file_path: &str, line: u32, column: u32, args: &[&str]) -> Self {
        Finding {
            smell_id: smell.id.to_string(),
            severity: smell.default_severity,
            message: format_template(smell.message_template, args),
            tag_name: None,
            file_path: file_path.to_string(),
            line,
            column,
            snippet: None,
        }
    }

    pub fn with_tag(mut self, tag_name: &str) -> Self {
        self.tag_name = Some(tag_name.to_string());
        self
    }

    pub fn with_snippet(mut self, snippet: String) -> Self {
        self.snippet = Some(snippet);
        self
    }
}

/// Replaces `{0}`, `{1}`, ... placeholders in `template` with `args`.
pub fn format_template(template: &str, args: &[&str]) -> String {
    let mut message = template.to_string();
    for (index, arg) in args.iter().enumerate() {
        message = message.replace(&format!("{{{index}}}"), arg);
    }
    message
}

/// Flattens `source` to a single line and truncates it for display in
/// reports. Whitespace runs collapse to single spaces.
pub fn single_line_snippet(source: &str) -> String {
    let flattened = source.split_whitespace().collect::<Vec<_>>().join(" ");
    if flattened.chars().count() > MAX_SNIPPET_CHARS {
        let mut snippet: String = flattened.chars().take(MAX_SNIPPET_CHARS).collect();
        snippet.push_str("...");
        snippet
    } else {
        flattened
    }
}
