//! Doc comment well-formedness check
//!
//! Every scanner defect becomes a DOC400 finding. This runs over all doc
//! blocks in the file, attached to a declaration or not, because the fix
//! path refuses to rewrite files whose docs do not scan cleanly.

use crate::findings::{Finding, SmellRegistry};
use crate::syntax::SourceFileModel;

pub fn find_malformed_doc_smells(
    model: &SourceFileModel,
    file_path: &str,
    smells: &SmellRegistry,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for block in &model.doc_blocks {
        for defect in &block.defects {
            findings.push(Finding::new(
                &smells.malformed_doc,
                file_path,
                defect.line,
                defect.column,
                &[&defect.message],
            ));
        }
    }

    findings
}
