//! SARIF reporter
//!
//! Emits a SARIF 2.1.0 document for code scanning integrations. The rule
//! table lists only the smells actually referenced by the run, in first
//! reference order, so the artifact stays small and stable.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::NormalizerResult;
use crate::findings::{Finding, Severity, SmellRegistry};
use crate::reporting::{FindingsReporter, write_artifact};

const SARIF_SCHEMA: &str =
    "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";
const SARIF_VERSION: &str = "2.1.0";

pub struct SarifFindingsReporter {
    output_path: PathBuf,
    smells: SmellRegistry,
    findings: Vec<Finding>,
}

#[derive(Serialize)]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
struct SarifDriver {
    name: &'static str,
    version: &'static str,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
struct SarifRule {
    id: String,
    #[serde(rename = "shortDescription")]
    short_description: SarifText,
    #[serde(rename = "defaultConfiguration")]
    default_configuration: SarifConfiguration,
}

#[derive(Serialize)]
struct SarifConfiguration {
    level: &'static str,
}

#[derive(Serialize)]
struct SarifText {
    text: String,
}

#[derive(Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: &'static str,
    message: SarifText,
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
    region: SarifRegion,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
struct SarifRegion {
    #[serde(rename = "startLine")]
    start_line: u32,
    #[serde(rename = "startColumn")]
    start_column: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    snippet: Option<SarifText>,
}

fn severity_level(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Note => "note",
    }
}

impl SarifFindingsReporter {
    pub fn new(output_path: PathBuf, smells: SmellRegistry) -> Self {
        SarifFindingsReporter {
            output_path,
            smells,
            findings: Vec::new(),
        }
    }

    /// Rules for the distinct smells referenced by the accumulated
    /// findings, in first reference order.
    fn referenced_rules(&self) -> Vec<SarifRule> {
        let mut seen: Vec<&str> = Vec::new();
        for finding in &self.findings {
            if !seen.contains(&finding.smell_id.as_str()) {
                seen.push(&finding.smell_id);
            }
        }

        seen.iter()
            .filter_map(|id| self.smells.get(id))
            .map(|smell| SarifRule {
                id: smell.id.to_string(),
                short_description: SarifText {
                    text: smell.name.to_string(),
                },
                default_configuration: SarifConfiguration {
                    level: severity_level(smell.default_severity),
                },
            })
            .collect()
    }

    fn to_result(finding: &Finding) -> SarifResult {
        SarifResult {
            rule_id: finding.smell_id.clone(),
            level: severity_level(finding.severity),
            message: SarifText {
                text: finding.message.clone(),
            },
            locations: vec![SarifLocation {
                physical_location: SarifPhysicalLocation {
                    artifact_location: SarifArtifactLocation {
                        uri: finding.file_path.replace('\\', "/"),
                    },
                    region: SarifRegion {
                        start_line: finding.line,
                        start_column: finding.column,
                        snippet: finding
                            .snippet
                            .as_ref()
                            .map(|text| SarifText { text: text.clone() }),
                    },
                },
            }],
        }
    }
}

impl FindingsReporter for SarifFindingsReporter {
    fn report_file(&mut self, _file_path: &str, findings: &[Finding]) -> NormalizerResult<()> {
        self.findings.extend_from_slice(findings);
        Ok(())
    }

    fn complete(&mut self) -> NormalizerResult<()> {
        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: env!("CARGO_PKG_NAME"),
                        version: env!("CARGO_PKG_VERSION"),
                        rules: self.referenced_rules(),
                    },
                },
                results: self.findings.iter().map(Self::to_result).collect(),
            }],
        };
        let payload = serde_json::to_string_pretty(&log)?;
        write_artifact(&self.output_path, &payload)
    }
}
