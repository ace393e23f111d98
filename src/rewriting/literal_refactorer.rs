//! Literal markup normalization inside doc comments
//!
//! Three families of trivial markup are rewritten to plain text:
//!
//! - `<see langword="..."/>` becomes the keyword itself
//! - `<c>` is unwrapped: single-token content replaces the whole element,
//!   multi-token content keeps its bytes and only loses the wrapper tags,
//!   empty elements are deleted
//! - `<code>` is unwrapped only when its content is a single token after
//!   whitespace normalization; real code blocks are never touched
//!
//! Only clean `///` blocks are rewritten. Blocks with scan defects and
//! `/** */` blocks are left alone.

use std::ops::Range;

use crate::syntax::doc_comment::{normalize_whitespace, strip_doc_exterior};
use crate::syntax::{DocComment, DocStyle, DocTag};

/// One byte-span replacement in the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub span: Range<usize>,
    pub replacement: String,
}

/// Computes the literal normalization edits for every eligible doc block.
pub fn normalize_edits(blocks: &[DocComment], source: &str) -> Vec<Edit> {
    let mut edits = Vec::new();
    for block in blocks {
        if block.style != DocStyle::TripleSlash || !block.defects.is_empty() {
            continue;
        }
        for index in block.top_level_tags() {
            process_tag(block, index, source, &mut edits);
        }
    }
    edits
}

/// Applies edits back to front so earlier spans stay valid. Edits never
/// overlap by construction.
pub fn apply_edits(source: &str, mut edits: Vec<Edit>) -> String {
    edits.sort_by(|a, b| b.span.start.cmp(&a.span.start));
    let mut result = source.to_string();
    for edit in edits {
        result.replace_range(edit.span.clone(), &edit.replacement);
    }
    result
}

/// Rewrites `source` and returns the new text, or None when nothing
/// needed changing.
pub fn rewrite(source: &str, blocks: &[DocComment]) -> Option<String> {
    let edits = normalize_edits(blocks, source);
    if edits.is_empty() {
        None
    } else {
        Some(apply_edits(source, edits))
    }
}

fn process_tag(block: &DocComment, index: usize, source: &str, edits: &mut Vec<Edit>) {
    let tag = &block.tags[index];
    let children = block.child_tags(index);

    match tag.name.as_str() {
        "see" if tag.self_closing => {
            if let Some(keyword) = tag.attribute("langword") {
                edits.push(Edit {
                    span: tag.span.clone(),
                    replacement: keyword.to_string(),
                });
            }
        }
        "c" | "code" if tag.inner.is_some() => {
            if children.is_empty() {
                text_only_literal_edit(tag, source, edits);
            } else {
                // flatten: drop the wrapper tags, keep the interior and
                // process whatever is nested in it
                push_wrapper_removal(tag, edits);
                for child in children {
                    process_tag(block, child, source, edits);
                }
            }
        }
        _ => {
            for child in children {
                process_tag(block, child, source, edits);
            }
        }
    }
}

fn text_only_literal_edit(tag: &DocTag, source: &str, edits: &mut Vec<Edit>) {
    let Some(inner) = tag.inner_text(source) else {
        return;
    };
    let content = normalize_whitespace(&strip_doc_exterior(inner));

    if content.is_empty() {
        edits.push(Edit {
            span: tag.span.clone(),
            replacement: String::new(),
        });
        return;
    }

    let single_token = !content.contains(' ');
    if single_token {
        edits.push(Edit {
            span: tag.span.clone(),
            replacement: content,
        });
    } else if tag.name == "c" {
        push_wrapper_removal(tag, edits);
    }
    // multi token <code> keeps its exact bytes
}

fn push_wrapper_removal(tag: &DocTag, edits: &mut Vec<Edit>) {
    let Some(inner) = &tag.inner else {
        return;
    };
    edits.push(Edit {
        span: tag.span.start..inner.start,
        replacement: String::new(),
    });
    edits.push(Edit {
        span: inner.end..tag.span.end,
        replacement: String::new(),
    });
}

#[cfg(test)]
#[path = "literal_refactorer_tests.rs"]
mod tests;
