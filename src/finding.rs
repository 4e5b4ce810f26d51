use std::fmt;
use std::path::{Path, PathBuf};

/// Broad class of a validation error.
///
/// Structural, syntax and shape errors end validation of their document;
/// field errors are collected side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Structural,
    Syntax,
    Shape,
    Field,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Structural => write!(f, "structural"),
            Category::Syntax => write!(f, "syntax"),
            Category::Shape => write!(f, "shape"),
            Category::Field => write!(f, "field"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationError {
    pub file: PathBuf,
    pub rule_id: String,
    pub category: Category,
    pub message: String,
}

impl ValidationError {
    pub fn new(file: &Path, rule_id: &str, category: Category, message: impl Into<String>) -> Self {
        ValidationError {
            file: file.to_path_buf(),
            rule_id: rule_id.to_string(),
            category,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file.display(), self.message)
    }
}

/// Outcome of linting every skill under one root directory.
#[derive(Debug, serde::Serialize)]
pub struct LintReport {
    pub root: PathBuf,
    pub lint_timestamp: String,
    pub documents: Vec<PathBuf>,
    pub errors: Vec<ValidationError>,
    pub passed: bool,
}

impl LintReport {
    pub fn from_errors(root: &Path, documents: Vec<PathBuf>, errors: Vec<ValidationError>) -> Self {
        let passed = errors.is_empty();
        LintReport {
            root: root.to_path_buf(),
            lint_timestamp: chrono::Utc::now().to_rfc3339(),
            documents,
            errors,
            passed,
        }
    }

    pub fn documents_validated(&self) -> usize {
        self.documents.len()
    }

    /// Number of documents with at least one error.
    pub fn failed_documents(&self) -> usize {
        let mut failed: Vec<&Path> = self.errors.iter().map(|e| e.file.as_path()).collect();
        failed.dedup();
        failed.len()
    }

    /// Count errors per category in a single pass.
    ///
    /// Returns `(structural, syntax, shape, field)`.
    pub fn count_by_category(&self) -> (usize, usize, usize, usize) {
        self.errors
            .iter()
            .fold((0, 0, 0, 0), |(st, sy, sh, fi), e| match e.category {
                Category::Structural => (st + 1, sy, sh, fi),
                Category::Syntax => (st, sy + 1, sh, fi),
                Category::Shape => (st, sy, sh + 1, fi),
                Category::Field => (st, sy, sh, fi + 1),
            })
    }
}
