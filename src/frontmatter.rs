//! Frontmatter extraction and YAML parsing.
//!
//! A skill document starts with a `---` line, followed by a YAML block, closed
//! by the next `---` line. Everything after the closing marker is the body and
//! is ignored here.

use serde_yaml::{Mapping, Value};

/// The opening and closing marker line.
pub const MARKER: &str = "---";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrontmatterError {
    #[error("missing YAML frontmatter block")]
    Missing,

    #[error("invalid YAML: {0}")]
    InvalidYaml(String),

    #[error("frontmatter must be a YAML mapping (found {0})")]
    NotAMapping(&'static str),
}

impl From<serde_yaml::Error> for FrontmatterError {
    fn from(err: serde_yaml::Error) -> Self {
        FrontmatterError::InvalidYaml(err.to_string())
    }
}

/// Splits `content` into its frontmatter block and body.
///
/// Returns `None` when the document does not open with a marker line or the
/// block is never closed. The block is every line strictly between the first
/// two marker lines, joined with `\n`; later markers belong to the body.
///
/// ```
/// use oxidized_frontmatter::frontmatter::split_frontmatter;
///
/// let (block, body) = split_frontmatter("---\nname: x\n---\n# Body\n").unwrap();
/// assert_eq!(block, "name: x");
/// assert_eq!(body, "# Body");
/// assert!(split_frontmatter("# No frontmatter\n").is_none());
/// ```
pub fn split_frontmatter(content: &str) -> Option<(String, String)> {
    if !content.starts_with(MARKER) {
        return None;
    }

    let lines: Vec<&str> = content.lines().collect();
    if lines.first().map(|l| l.trim()) != Some(MARKER) {
        return None;
    }

    let close = lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim() == MARKER)
        .map(|(idx, _)| idx)?;

    Some((lines[1..close].join("\n"), lines[close + 1..].join("\n")))
}

/// Returns just the frontmatter block of `content`.
pub fn extract_frontmatter(content: &str) -> Option<String> {
    split_frontmatter(content).map(|(block, _)| block)
}

/// Parses a frontmatter block as a YAML mapping.
///
/// An empty block (or one that is YAML `null`) yields an empty mapping.
///
/// # Errors
///
/// [`FrontmatterError::InvalidYaml`] when the block is not valid YAML, and
/// [`FrontmatterError::NotAMapping`] when it parses to a sequence or scalar.
pub fn parse_metadata(block: &str) -> Result<Mapping, FrontmatterError> {
    if block.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(block)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        other => Err(FrontmatterError::NotAMapping(kind_of(&other))),
    }
}

/// Extracts and parses in one step.
///
/// # Errors
///
/// [`FrontmatterError::Missing`] when there is no complete block, otherwise
/// whatever [`parse_metadata`] returns.
pub fn read_metadata(content: &str) -> Result<Mapping, FrontmatterError> {
    let block = extract_frontmatter(content).ok_or(FrontmatterError::Missing)?;
    parse_metadata(&block)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_between_first_two_markers() {
        let doc = "---\nname: a\n---\nbody\n---\nmore\n";
        let (block, body) = split_frontmatter(doc).unwrap();
        assert_eq!(block, "name: a");
        assert_eq!(body, "body\n---\nmore");
    }

    #[test]
    fn marker_lines_may_carry_trailing_whitespace() {
        let doc = "---  \r\nname: a\r\n---\t\r\n";
        assert_eq!(extract_frontmatter(doc).as_deref(), Some("name: a"));
    }

    #[test]
    fn leading_whitespace_is_not_a_marker() {
        assert!(extract_frontmatter("  ---\nname: a\n---\n").is_none());
        assert!(extract_frontmatter("\n---\nname: a\n---\n").is_none());
    }

    #[test]
    fn first_line_must_be_exactly_the_marker() {
        assert!(extract_frontmatter("--- title\nname: a\n---\n").is_none());
        assert!(extract_frontmatter("----\nname: a\n---\n").is_none());
    }

    #[test]
    fn unclosed_block_is_missing() {
        assert!(extract_frontmatter("---\nname: a\ndescription: b\n").is_none());
        assert_eq!(read_metadata("---\n"), Err(FrontmatterError::Missing));
    }

    #[test]
    fn empty_block_is_empty_mapping() {
        assert!(read_metadata("---\n---\n").unwrap().is_empty());
        assert!(read_metadata("---\n   \n---\n").unwrap().is_empty());
        assert!(read_metadata("---\n~\n---\n").unwrap().is_empty());
    }

    #[test]
    fn sequence_is_not_a_mapping() {
        assert_eq!(
            parse_metadata("- a\n- b"),
            Err(FrontmatterError::NotAMapping("a sequence"))
        );
        assert_eq!(
            parse_metadata("just text"),
            Err(FrontmatterError::NotAMapping("a string"))
        );
    }

    #[test]
    fn broken_yaml_reports_parser_message() {
        let err = parse_metadata("name: [unclosed").unwrap_err();
        match err {
            FrontmatterError::InvalidYaml(msg) => assert!(!msg.is_empty()),
            other => panic!("expected InvalidYaml, got {other:?}"),
        }
    }
}
