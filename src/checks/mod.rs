//! Documentation checks
//!
//! Each check inspects the extracted file model and returns findings. They
//! run in a fixed order (well-formedness, tag usage, params, typeparams)
//! so reports are deterministic across runs.

pub mod allowed_tags;
pub mod params;
pub mod tag_usage;
pub mod type_params;
pub mod well_formed;

mod named_tags;

use crate::findings::{Finding, SmellRegistry};
use crate::syntax::SourceFileModel;

/// Runs every check against one file's model.
pub fn run_checks(
    model: &SourceFileModel,
    file_path: &str,
    source: &str,
    smells: &SmellRegistry,
) -> Vec<Finding> {
    let mut findings = well_formed::find_malformed_doc_smells(model, file_path, smells);
    findings.extend(tag_usage::find_tag_usage_smells(
        model, file_path, source, smells,
    ));
    findings.extend(params::find_param_smells(model, file_path, source, smells));
    findings.extend(type_params::find_type_param_smells(
        model, file_path, source, smells,
    ));
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::findings::ids;
    use crate::syntax::{CsParser, extract_file_model};

    #[test]
    fn test_checks_run_in_fixed_order() {
        let source = r#"
class Widget
{
    /// <summary>Sets size.</summary>
    /// <returns>Nothing
    public int Size { get; set; }

    /// <summary>Runs.</summary>
    public void Run(int speed) { }
}
"#;
        let mut parser = CsParser::new().unwrap();
        let tree = parser.parse(source).unwrap();
        let model = extract_file_model(&tree, source);
        let findings = run_checks(&model, "Test.cs", source, &SmellRegistry::new());

        let reported: Vec<&str> = findings.iter().map(|f| f.smell_id.as_str()).collect();
        assert_eq!(reported, vec![
            ids::MALFORMED_DOC,
            ids::INVALID_TAG,
            ids::MISSING_PARAM_TAG,
        ]);
    }
}
