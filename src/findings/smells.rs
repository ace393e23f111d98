//! Smell definitions
//!
//! Every smell the tool can report is declared here once, with a stable
//! id, a short description and a message template. The registry is
//! immutable after construction and shared by reference with detectors
//! and reporters.

use crate::findings::Severity;

/// Stable smell ids. Detectors and tests refer to these instead of
/// repeating string literals.
pub mod ids {
    pub const INVALID_TAG: &str = "DOC140";
    pub const EMPTY_SUMMARY: &str = "DOC200";
    pub const MISSING_PARAM_TAG: &str = "DOC310";
    pub const EMPTY_PARAM_DESCRIPTION: &str = "DOC320";
    pub const UNKNOWN_PARAM_TAG: &str = "DOC330";
    pub const DUPLICATE_PARAM_TAG: &str = "DOC350";
    pub const MALFORMED_DOC: &str = "DOC400";
    pub const MISSING_TYPE_PARAM_TAG: &str = "DOC410";
    pub const EMPTY_TYPE_PARAM_DESCRIPTION: &str = "DOC420";
    pub const UNKNOWN_TYPE_PARAM_TAG: &str = "DOC430";
    pub const DUPLICATE_TYPE_PARAM_TAG: &str = "DOC450";
}

/// Definition of one reportable documentation smell.
#[derive(Debug, Clone)]
pub struct Smell {
    pub id: &'static str,
    /// Short human readable description, used as the SARIF rule description.
    pub name: &'static str,
    /// Message with `{0}`/`{1}` placeholders.
    pub message_template: &'static str,
    pub default_severity: Severity,
}

/// The full set of smells this tool knows about.
#[derive(Debug, Clone)]
pub struct SmellRegistry {
    pub invalid_tag: Smell,
    pub empty_summary: Smell,
    pub missing_param_tag: Smell,
    pub empty_param_description: Smell,
    pub unknown_param_tag: Smell,
    pub duplicate_param_tag: Smell,
    pub malformed_doc: Smell,
    pub missing_type_param_tag: Smell,
    pub empty_type_param_description: Smell,
    pub unknown_type_param_tag: Smell,
    pub duplicate_type_param_tag: Smell,
}

impl SmellRegistry {
    pub fn new() -> Self {
        SmellRegistry {
            invalid_tag: Smell {
                id: ids::INVALID_TAG,
                name: "Disallowed documentation tag",
                message_template: "The tag <{0}> is not allowed on {1} declarations.",
                default_severity: Severity::Warning,
            },
            empty_summary: Smell {
                id: ids::EMPTY_SUMMARY,
                name: "Empty summary section",
                message_template: "The <summary> section is empty.",
                default_severity: Severity::Warning,
            },
            missing_param_tag: Smell {
                id: ids::MISSING_PARAM_TAG,
                name: "Missing param documentation",
                message_template: "Missing <param> documentation for parameter '{0}'.",
                default_severity: Severity::Warning,
            },
            empty_param_description: Smell {
                id: ids::EMPTY_PARAM_DESCRIPTION,
                name: "Empty param description",
                message_template: "The <param> documentation for '{0}' is empty.",
                default_severity: Severity::Warning,
            },
            unknown_param_tag: Smell {
                id: ids::UNKNOWN_PARAM_TAG,
                name: "Unknown param reference",
                message_template: "The <param> tag references unknown parameter '{0}'.",
                default_severity: Severity::Warning,
            },
            duplicate_param_tag: Smell {
                id: ids::DUPLICATE_PARAM_TAG,
                name: "Duplicate param documentation",
                message_template: "Duplicate <param> documentation for parameter '{0}'.",
                default_severity: Severity::Warning,
            },
            malformed_doc: Smell {
                id: ids::MALFORMED_DOC,
                name: "Malformed XML documentation",
                message_template: "Malformed XML documentation: {0}.",
                default_severity: Severity::Error,
            },
            missing_type_param_tag: Smell {
                id: ids::MISSING_TYPE_PARAM_TAG,
                name: "Missing typeparam documentation",
                message_template: "Missing <typeparam> documentation for type parameter '{0}'.",
                default_severity: Severity::Warning,
            },
            empty_type_param_description: Smell {
                id: ids::EMPTY_TYPE_PARAM_DESCRIPTION,
                name: "Empty typeparam description",
                message_template: "The <typeparam> documentation for '{0}' is empty.",
                default_severity: Severity::Warning,
            },
            unknown_type_param_tag: Smell {
                id: ids::UNKNOWN_TYPE_PARAM_TAG,
                name: "Unknown typeparam reference",
                message_template: "The <typeparam> tag references unknown type parameter '{0}'.",
                default_severity: Severity::Warning,
            },
            duplicate_type_param_tag: Smell {
                id: ids::DUPLICATE_TYPE_PARAM_TAG,
                name: "Duplicate typeparam documentation",
                message_template: "Duplicate <typeparam> documentation for type parameter '{0}'.",
                default_severity: Severity::Warning,
            },
        }
    }

    /// All registered smells in id order.
    pub fn all(&self) -> Vec<&Smell> {
        vec![
            &self.invalid_tag,
            &self.empty_summary,
            &self.missing_param_tag,
            &self.empty_param_description,
            &self.unknown_param_tag,
            &self.duplicate_param_tag,
            &self.malformed_doc,
            &self.missing_type_param_tag,
            &self.empty_type_param_description,
            &self.unknown_type_param_tag,
            &self.duplicate_type_param_tag,
        ]
    }

    /// Looks up a smell by its id.
    pub fn get(&self, id: &str) -> Option<&Smell> {
        self.all().into_iter().find(|smell| smell.id == id)
    }
}

impl Default for SmellRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_ids_are_unique() {
        let registry = SmellRegistry::new();
        let all = registry.all();
        for (index, smell) in all.iter().enumerate() {
            for other in &all[index + 1..] {
                assert_ne!(smell.id, other.id);
            }
        }
    }

    #[test]
    fn test_get_finds_registered_smell() {
        let registry = SmellRegistry::new();
        let smell = registry.get(ids::DUPLICATE_TYPE_PARAM_TAG);
        assert!(smell.is_some());
        assert_eq!(smell.map(|s| s.id), Some("DOC450"));
        assert!(registry.get("DOC999").is_none());
    }

    #[test]
    fn test_malformed_doc_is_an_error() {
        let registry = SmellRegistry::new();
        assert_eq!(registry.malformed_doc.default_severity, Severity::Error);
    }
}
