//! Schema validation of skill frontmatter.
//!
//! # Rules
//!
//! | ID | Category | What it checks |
//! |----|----------|----------------|
//! | `frontmatter/unreadable` | Structural | Document must be readable UTF-8 text |
//! | `frontmatter/missing` | Structural | Document must open with a closed `---` block |
//! | `frontmatter/invalid-yaml` | Syntax | Block must be valid YAML |
//! | `frontmatter/not-a-mapping` | Shape | Block must be a YAML mapping |
//! | `frontmatter/unexpected-keys` | Shape | Keys must be exactly `name` and `description` |
//! | `frontmatter/name-missing` | Field | `name` must be a non-empty string |
//! | `frontmatter/invalid-name-format` | Field | `name` must match `^[a-z0-9-]{1,64}$` |
//! | `frontmatter/name-reserved-word` | Field | `name` must not be a reserved word |
//! | `frontmatter/description-missing` | Field | `description` must be a non-empty string |
//! | `frontmatter/description-too-long` | Field | `description` must not exceed the maximum length (1024 by default) |
//! | `frontmatter/markup-in-description` | Field | `description` must not contain tag-shaped text |
//!
//! Structural, syntax and shape failures of the block itself stop validation
//! of that document. The key-set check and every field check always run.

use crate::config::Schema;
use crate::finding::{Category, ValidationError};
use crate::frontmatter::{self, FrontmatterError};
use serde_yaml::{Mapping, Value};
use std::path::Path;

pub const RULE_UNREADABLE: &str = "frontmatter/unreadable";
pub const RULE_MISSING: &str = "frontmatter/missing";
pub const RULE_INVALID_YAML: &str = "frontmatter/invalid-yaml";
pub const RULE_NOT_A_MAPPING: &str = "frontmatter/not-a-mapping";
pub const RULE_UNEXPECTED_KEYS: &str = "frontmatter/unexpected-keys";
pub const RULE_NAME_MISSING: &str = "frontmatter/name-missing";
pub const RULE_NAME_FORMAT: &str = "frontmatter/invalid-name-format";
pub const RULE_NAME_RESERVED: &str = "frontmatter/name-reserved-word";
pub const RULE_DESCRIPTION_MISSING: &str = "frontmatter/description-missing";
pub const RULE_DESCRIPTION_TOO_LONG: &str = "frontmatter/description-too-long";
pub const RULE_DESCRIPTION_MARKUP: &str = "frontmatter/markup-in-description";

/// Validates one document's raw text against `schema`.
///
/// Returns every violation in check order; an empty vector means the
/// document is valid.
///
/// ```
/// use std::path::Path;
/// use oxidized_frontmatter::config::Schema;
/// use oxidized_frontmatter::validate::validate_document;
///
/// let schema = Schema::default();
/// let doc = "---\nname: my-skill\ndescription: Does a thing.\n---\n# My skill\n";
/// assert!(validate_document(Path::new("my-skill/SKILL.md"), doc, &schema).is_empty());
/// ```
pub fn validate_document(path: &Path, content: &str, schema: &Schema) -> Vec<ValidationError> {
    let metadata = match frontmatter::read_metadata(content) {
        Ok(m) => m,
        Err(e) => return vec![frontmatter_failure(path, &e)],
    };

    let mut errors = Vec::new();
    validate_key_set(&mut errors, &metadata, schema, path);
    validate_name(&mut errors, metadata.get("name"), schema, path);
    validate_description(&mut errors, metadata.get("description"), schema, path);
    errors
}

fn frontmatter_failure(path: &Path, err: &FrontmatterError) -> ValidationError {
    let (rule, category) = match err {
        FrontmatterError::Missing => (RULE_MISSING, Category::Structural),
        FrontmatterError::InvalidYaml(_) => (RULE_INVALID_YAML, Category::Syntax),
        FrontmatterError::NotAMapping(_) => (RULE_NOT_A_MAPPING, Category::Shape),
    };
    ValidationError::new(path, rule, category, err.to_string())
}

fn validate_key_set(
    errors: &mut Vec<ValidationError>,
    metadata: &Mapping,
    schema: &Schema,
    path: &Path,
) {
    let required = schema.required_keys();

    let mut unexpected: Vec<String> = metadata
        .keys()
        .filter(|k| !k.as_str().is_some_and(|s| required.contains(&s)))
        .map(key_label)
        .collect();
    unexpected.sort();

    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|r| !metadata.contains_key(*r))
        .collect();

    if unexpected.is_empty() && missing.is_empty() {
        return;
    }

    let mut detail = Vec::new();
    if !unexpected.is_empty() {
        detail.push(format!("unexpected: [{}]", unexpected.join(", ")));
    }
    if !missing.is_empty() {
        detail.push(format!("missing: [{}]", missing.join(", ")));
    }

    errors.push(ValidationError::new(
        path,
        RULE_UNEXPECTED_KEYS,
        Category::Shape,
        format!(
            "frontmatter keys must be exactly [{}] ({})",
            required.join(", "),
            detail.join("; ")
        ),
    ));
}

fn validate_name(
    errors: &mut Vec<ValidationError>,
    value: Option<&Value>,
    schema: &Schema,
    path: &Path,
) {
    let Some(name) = non_empty_str(value) else {
        errors.push(ValidationError::new(
            path,
            RULE_NAME_MISSING,
            Category::Field,
            "frontmatter.name must be a non-empty string",
        ));
        return;
    };

    if !schema.name_pattern().is_match(name) {
        errors.push(ValidationError::new(
            path,
            RULE_NAME_FORMAT,
            Category::Field,
            format!(
                "frontmatter.name '{name}' must match {}",
                schema.name_pattern().as_str()
            ),
        ));
    }

    if schema.is_reserved(name) {
        errors.push(ValidationError::new(
            path,
            RULE_NAME_RESERVED,
            Category::Field,
            format!("frontmatter.name '{name}' is a reserved word"),
        ));
    }
}

fn validate_description(
    errors: &mut Vec<ValidationError>,
    value: Option<&Value>,
    schema: &Schema,
    path: &Path,
) {
    let Some(description) = non_empty_str(value) else {
        errors.push(ValidationError::new(
            path,
            RULE_DESCRIPTION_MISSING,
            Category::Field,
            "frontmatter.description must be a non-empty string",
        ));
        return;
    };

    let max = schema.description_max_chars();
    let len = description.chars().count();
    if len > max {
        errors.push(ValidationError::new(
            path,
            RULE_DESCRIPTION_TOO_LONG,
            Category::Field,
            format!("frontmatter.description is {len} characters; maximum is {max}"),
        ));
    }

    if let Some(tag) = schema.markup_pattern().find(description) {
        errors.push(ValidationError::new(
            path,
            RULE_DESCRIPTION_MARKUP,
            Category::Field,
            format!(
                "frontmatter.description must not contain markup tags (found '{}')",
                tag.as_str()
            ),
        ));
    }
}

/// The string value of a field, when it is a string with visible content.
fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Renders a mapping key for messages. Non-string keys use their YAML form.
fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| "<unprintable key>".to_string()),
    }
}

/// Metadata for a single validation rule.
///
/// Returned by [`rules`] and used by `--list-rules` and the SARIF writer.
pub struct RuleInfo {
    /// Unique rule identifier (e.g., `"frontmatter/missing"`).
    pub id: &'static str,
    pub category: Category,
    /// Short description of what the rule checks.
    pub message: &'static str,
    /// Guidance on how to fix a violation.
    pub remediation: &'static str,
}

/// Returns the [`RuleInfo`] catalogue in check order.
pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: RULE_UNREADABLE,
            category: Category::Structural,
            message: "Skill document could not be read as UTF-8 text",
            remediation: "Make sure the file is readable and saved as UTF-8",
        },
        RuleInfo {
            id: RULE_MISSING,
            category: Category::Structural,
            message: "Document does not open with a closed '---' frontmatter block",
            remediation: "Start the file with a '---' line, the YAML fields, then a closing '---' line",
        },
        RuleInfo {
            id: RULE_INVALID_YAML,
            category: Category::Syntax,
            message: "Frontmatter block is not valid YAML",
            remediation: "Fix the YAML syntax reported by the parser",
        },
        RuleInfo {
            id: RULE_NOT_A_MAPPING,
            category: Category::Shape,
            message: "Frontmatter is not a YAML mapping",
            remediation: "Write the frontmatter as 'key: value' pairs",
        },
        RuleInfo {
            id: RULE_UNEXPECTED_KEYS,
            category: Category::Shape,
            message: "Frontmatter keys must be exactly 'name' and 'description'",
            remediation: "Remove extra keys and add any missing required key",
        },
        RuleInfo {
            id: RULE_NAME_MISSING,
            category: Category::Field,
            message: "Skill name is missing, empty, or not a string",
            remediation: "Add a 'name' field with a non-empty string value",
        },
        RuleInfo {
            id: RULE_NAME_FORMAT,
            category: Category::Field,
            message: "Skill name must be 1-64 lowercase letters, digits, or hyphens",
            remediation: "Rename to lowercase-kebab-case (e.g. 'my-skill' not 'My_Skill')",
        },
        RuleInfo {
            id: RULE_NAME_RESERVED,
            category: Category::Field,
            message: "Skill name is a reserved word",
            remediation: "Choose a name that is not a reserved brand term",
        },
        RuleInfo {
            id: RULE_DESCRIPTION_MISSING,
            category: Category::Field,
            message: "Skill description is missing, empty, or not a string",
            remediation: "Add a 'description' field with a non-empty string value",
        },
        RuleInfo {
            id: RULE_DESCRIPTION_TOO_LONG,
            category: Category::Field,
            message: "Description exceeds the configured maximum length",
            remediation: "Shorten the description to the configured maximum length or fewer characters",
        },
        RuleInfo {
            id: RULE_DESCRIPTION_MARKUP,
            category: Category::Field,
            message: "Description contains a markup tag",
            remediation: "Remove '<...>' tags from the description",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(block: &str) -> Vec<ValidationError> {
        let doc = format!("---\n{block}\n---\n# Body\n");
        validate_document(Path::new("s/SKILL.md"), &doc, &Schema::default())
    }

    fn rule_ids(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.rule_id.as_str()).collect()
    }

    #[test]
    fn key_label_renders_non_string_keys() {
        assert_eq!(key_label(&Value::String("x".into())), "x");
        assert_eq!(key_label(&Value::Bool(true)), "true");
        assert_eq!(key_label(&Value::Number(7.into())), "7");
    }

    #[test]
    fn non_string_name_is_a_presence_error_only() {
        let errors = check("name: 42\ndescription: Does a thing.");
        assert_eq!(rule_ids(&errors), [RULE_NAME_MISSING]);
    }

    #[test]
    fn whitespace_only_description_is_missing() {
        let errors = check("name: ok\ndescription: \"   \"");
        assert_eq!(rule_ids(&errors), [RULE_DESCRIPTION_MISSING]);
    }

    #[test]
    fn every_field_check_runs() {
        let long = format!("<b>{}", "x".repeat(1100));
        let errors = check(&format!("name: Claude_Skill\ndescription: {long}\nextra: 1"));
        assert_eq!(
            rule_ids(&errors),
            [
                RULE_UNEXPECTED_KEYS,
                RULE_NAME_FORMAT,
                RULE_DESCRIPTION_TOO_LONG,
                RULE_DESCRIPTION_MARKUP,
            ]
        );
    }

    #[test]
    fn catalogue_covers_every_rule_once() {
        let catalogue = rules();
        let mut ids: Vec<&str> = catalogue.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalogue.len());
        assert_eq!(catalogue.len(), 11);
    }

    #[test]
    fn length_rule_text_does_not_fix_a_limit() {
        let catalogue = rules();
        let rule = catalogue
            .iter()
            .find(|r| r.id == RULE_DESCRIPTION_TOO_LONG)
            .unwrap();
        assert!(!rule.message.chars().any(|c| c.is_ascii_digit()));
        assert!(!rule.remediation.chars().any(|c| c.is_ascii_digit()));
    }
}
