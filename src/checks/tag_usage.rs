//! Tag usage checks
//!
//! DOC140 for tags that are not permitted on the documented declaration
//! kind, one finding per offending occurrence, and DOC200 for a present
//! but empty `<summary>` section.

use crate::checks::allowed_tags::is_tag_allowed;
use crate::findings::{Finding, SmellRegistry, single_line_snippet};
use crate::syntax::SourceFileModel;

pub fn find_tag_usage_smells(
    model: &SourceFileModel,
    file_path: &str,
    source: &str,
    smells: &SmellRegistry,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for declaration in &model.declarations {
        let Some(doc) = &declaration.doc else {
            continue;
        };

        for tag in &doc.tags {
            if !is_tag_allowed(declaration.kind, &tag.name) {
                findings.push(
                    Finding::new(&smells.invalid_tag, file_path, tag.line, tag.column, &[
                        &tag.name,
                        declaration.kind.display_name(),
                    ])
                    .with_tag(&tag.name)
                    .with_snippet(single_line_snippet(&source[tag.span.clone()])),
                );
            }
        }

        for tag in doc.tags.iter().filter(|tag| tag.name == "summary") {
            // an unclosed summary is covered by the malformed doc check
            if tag.inner.is_none() && !tag.self_closing {
                continue;
            }
            if !doc.has_meaningful_content(tag, source) {
                findings.push(
                    Finding::new(&smells.empty_summary, file_path, tag.line, tag.column, &[])
                        .with_tag("summary")
                        .with_snippet(single_line_snippet(&source[tag.span.clone()])),
                );
            }
        }
    }

    findings
}

#[cfg(test)]
#[path = "tag_usage_tests.rs"]
mod tests;
