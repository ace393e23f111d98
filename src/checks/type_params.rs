//! `<typeparam>` checks against the declaration's type parameter list
//!
//! The typeparam mirror of the `<param>` rules: DOC450 duplicates, DOC420
//! empty descriptions, DOC410 undocumented type parameters, DOC430 unknown
//! names. Runs on every generic-capable declaration, so a `<typeparam>` on
//! a non-generic method comes back as DOC430 rather than a usage smell.

use crate::checks::allowed_tags::allows_type_param;
use crate::checks::named_tags::{NamedTagSmells, check_named_tags};
use crate::findings::{Finding, SmellRegistry};
use crate::syntax::SourceFileModel;

pub fn find_type_param_smells(
    model: &SourceFileModel,
    file_path: &str,
    source: &str,
    smells: &SmellRegistry,
) -> Vec<Finding> {
    let mut findings = Vec::new();
    let named_smells = NamedTagSmells {
        missing: &smells.missing_type_param_tag,
        empty: &smells.empty_type_param_description,
        unknown: &smells.unknown_type_param_tag,
        duplicate: &smells.duplicate_type_param_tag,
    };

    for declaration in &model.declarations {
        if !allows_type_param(declaration.kind) {
            continue;
        }
        let Some(doc) = &declaration.doc else {
            continue;
        };
        check_named_tags(
            "typeparam",
            &declaration.type_parameters,
            doc,
            file_path,
            source,
            &named_smells,
            &mut findings,
        );
    }

    findings
}

#[cfg(test)]
#[path = "type_params_tests.rs"]
mod tests;
