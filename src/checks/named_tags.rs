//! Shared engine for name-attributed tag families
//!
//! `<param>` and `<typeparam>` follow the same rules against different name
//! lists, so both checks delegate here. Reported per declaration in a fixed
//! order: duplicates, empty descriptions, missing tags, unknown names.

use crate::findings::{Finding, Smell, single_line_snippet};
use crate::syntax::{DocComment, DocTag, Param};

pub(super) struct NamedTagSmells<'a> {
    pub missing: &'a Smell,
    pub empty: &'a Smell,
    pub unknown: &'a Smell,
    pub duplicate: &'a Smell,
}

pub(super) fn check_named_tags(
    tag_name: &str,
    declared: &[Param],
    doc: &DocComment,
    file_path: &str,
    source: &str,
    smells: &NamedTagSmells<'_>,
    findings: &mut Vec<Finding>,
) {
    // group occurrences by referenced name, in first occurrence order;
    // tags without a usable name are owned by the malformed doc check
    let mut groups: Vec<(&str, Vec<&DocTag>)> = Vec::new();
    for tag in doc.tags.iter().filter(|tag| tag.name == tag_name) {
        let Some(name) = tag.attribute("name").filter(|name| !name.trim().is_empty()) else {
            continue;
        };
        match groups.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, occurrences)) => occurrences.push(tag),
            None => groups.push((name, vec![tag])),
        }
    }

    // duplicates: the second and later occurrences of a name
    for (name, occurrences) in &groups {
        for tag in occurrences.iter().skip(1) {
            findings.push(
                Finding::new(smells.duplicate, file_path, tag.line, tag.column, &[name])
                    .with_tag(tag_name)
                    .with_snippet(single_line_snippet(&source[tag.span.clone()])),
            );
        }
    }

    // empty descriptions, judged on the first occurrence of each name;
    // unclosed tags are covered by the malformed doc check instead
    for (name, occurrences) in &groups {
        let first = occurrences[0];
        if first.inner.is_none() && !first.self_closing {
            continue;
        }
        if !doc.has_meaningful_content(first, source) {
            findings.push(
                Finding::new(smells.empty, file_path, first.line, first.column, &[name])
                    .with_tag(tag_name)
                    .with_snippet(single_line_snippet(&source[first.span.clone()])),
            );
        }
    }

    // missing: declared names with no tag, anchored at the declaration site
    for param in declared {
        if !groups.iter().any(|(name, _)| *name == param.name) {
            findings.push(
                Finding::new(
                    smells.missing,
                    file_path,
                    param.line,
                    param.column,
                    &[&param.name],
                )
                .with_tag(tag_name)
                .with_snippet(single_line_snippet(&source[param.span.clone()])),
            );
        }
    }

    // unknown: documented names that match nothing declared
    for (name, occurrences) in &groups {
        if !declared.iter().any(|param| param.name == *name) {
            let first = occurrences[0];
            findings.push(
                Finding::new(smells.unknown, file_path, first.line, first.column, &[name])
                    .with_tag(tag_name)
                    .with_snippet(single_line_snippet(&source[first.span.clone()])),
            );
        }
    }
}
