//! JSON reporter
//!
//! Accumulates findings per file and writes one aggregate document in
//! `complete`. Every reported file appears in the document, so the
//! artifact also records what was scanned.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::NormalizerResult;
use crate::findings::Finding;
use crate::reporting::{FindingsReporter, write_artifact};

pub struct JsonFindingsReporter {
    output_path: PathBuf,
    files: Vec<FileFindings>,
}

#[derive(Serialize)]
struct FileFindings {
    path: String,
    findings: Vec<Finding>,
}

#[derive(Serialize)]
struct FindingsDocument<'a> {
    version: u32,
    total_findings: usize,
    files: &'a [FileFindings],
}

impl JsonFindingsReporter {
    pub fn new(output_path: PathBuf) -> Self {
        JsonFindingsReporter {
            output_path,
            files: Vec::new(),
        }
    }
}

impl FindingsReporter for JsonFindingsReporter {
    fn report_file(&mut self, file_path: &str, findings: &[Finding]) -> NormalizerResult<()> {
        self.files.push(FileFindings {
            path: file_path.to_string(),
            findings: findings.to_vec(),
        });
        Ok(())
    }

    fn complete(&mut self) -> NormalizerResult<()> {
        let document = FindingsDocument {
            version: 1,
            total_findings: self.files.iter().map(|file| file.findings.len()).sum(),
            files: &self.files,
        };
        let payload = serde_json::to_string_pretty(&document)?;
        write_artifact(&self.output_path, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::findings::SmellRegistry;
    use serde_json::Value;

    fn sample_finding(registry: &SmellRegistry) -> Finding {
        Finding::new(&registry.missing_param_tag, "Assets/Player.cs", 8, 17, &[
            "count",
        ])
        .with_tag("param")
        .with_snippet("int count".to_string())
    }

    #[test]
    fn test_artifact_contains_ids_paths_and_totals() {
        let registry = SmellRegistry::new();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("findings.json");

        let mut reporter = JsonFindingsReporter::new(output.clone());
        reporter
            .report_file("Assets/Player.cs", &[sample_finding(&registry)])
            .unwrap();
        reporter.report_file("Assets/Clean.cs", &[]).unwrap();
        reporter.complete().unwrap();

        let payload = std::fs::read_to_string(&output).unwrap();
        assert!(payload.contains("DOC310"));
        assert!(payload.contains("Assets/Player.cs"));

        let document: Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(document["version"], 1);
        assert_eq!(document["total_findings"], 1);

        let files = document["files"].as_array().unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0]["path"], "Assets/Player.cs");
        assert_eq!(files[0]["findings"][0]["smell_id"], "DOC310");
        assert_eq!(files[0]["findings"][0]["line"], 8);
        assert_eq!(files[1]["path"], "Assets/Clean.cs");
        assert_eq!(files[1]["findings"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_complete_creates_parent_directories() {
        let registry = SmellRegistry::new();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested").join("artifacts").join("findings.json");

        let mut reporter = JsonFindingsReporter::new(output.clone());
        reporter
            .report_file("Test.cs", &[sample_finding(&registry)])
            .unwrap();
        reporter.complete().unwrap();

        assert!(output.exists());
    }

    #[test]
    fn test_absent_optional_fields_are_omitted() {
        let registry = SmellRegistry::new();
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("findings.json");

        let finding = Finding::new(&registry.malformed_doc, "Test.cs", 1, 1, &["unclosed"]);
        let mut reporter = JsonFindingsReporter::new(output.clone());
        reporter.report_file("Test.cs", &[finding]).unwrap();
        reporter.complete().unwrap();

        let document: Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        let serialized = &document["files"][0]["findings"][0];
        assert!(serialized.get("tag_name").is_none());
        assert!(serialized.get("snippet").is_none());
    }
}
