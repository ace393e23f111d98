//! `<param>` checks against the declaration's parameter list
//!
//! Emits DOC350 for duplicated names, DOC320 for empty descriptions,
//! DOC310 for undocumented parameters and DOC330 for names that match no
//! parameter. Declarations without a doc comment are skipped entirely;
//! missing documentation as such is not this check's business.

use crate::checks::allowed_tags::allows_param;
use crate::checks::named_tags::{NamedTagSmells, check_named_tags};
use crate::findings::{Finding, SmellRegistry};
use crate::syntax::SourceFileModel;

pub fn find_param_smells(
    model: &SourceFileModel,
    file_path: &str,
    source: &str,
    smells: &SmellRegistry,
) -> Vec<Finding> {
    let mut findings = Vec::new();
    let named_smells = NamedTagSmells {
        missing: &smells.missing_param_tag,
        empty: &smells.empty_param_description,
        unknown: &smells.unknown_param_tag,
        duplicate: &smells.duplicate_param_tag,
    };

    for declaration in &model.declarations {
        if !allows_param(declaration.kind) {
            continue;
        }
        let Some(doc) = &declaration.doc else {
            continue;
        };
        check_named_tags(
            "param",
            &declaration.parameters,
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
#[path = "params_tests.rs"]
mod tests;
