//! Lint orchestration.
//!
//! [`run_lint`] discovers every skill document under a root, reads each one
//! once, validates them in parallel via [rayon], and assembles a
//! [`LintReport`] whose errors appear in document order.

use crate::config::Schema;
use crate::discovery;
use crate::finding::{Category, LintReport, ValidationError};
use crate::validate::{self, RULE_UNREADABLE};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("skills directory not found: {}", .0.display())]
    RootNotFound(PathBuf),
}

/// Lints every `<root>/*/<file_name>` document against `schema`.
///
/// # Pipeline
///
/// 1. Checks that `root` is a directory.
/// 2. Discovers documents in lexicographic path order.
/// 3. Reads and validates each document **in parallel**; `collect` keeps
///    discovery order.
/// 4. Flattens the per-document errors into the final [`LintReport`].
///
/// # Errors
///
/// [`LintError::RootNotFound`] when `root` is not an existing directory. No
/// document is processed in that case.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use oxidized_frontmatter::{config::Schema, lint};
///
/// let report = lint::run_lint(Path::new(".codex/skills"), "SKILL.md", &Schema::default())?;
/// std::process::exit(if report.passed { 0 } else { 1 });
/// # Ok::<(), lint::LintError>(())
/// ```
pub fn run_lint(root: &Path, file_name: &str, schema: &Schema) -> Result<LintReport, LintError> {
    if !root.is_dir() {
        return Err(LintError::RootNotFound(root.to_path_buf()));
    }

    let documents = discovery::discover_documents(root, file_name);
    tracing::info!(root = %root.display(), documents = documents.len(), "linting skills");

    let errors: Vec<ValidationError> = documents
        .par_iter()
        .map(|doc| lint_file(doc, schema))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect();

    let report = LintReport::from_errors(root, documents, errors);
    tracing::info!(
        passed = report.passed,
        errors = report.errors.len(),
        "lint finished"
    );
    Ok(report)
}

/// Reads and validates a single document.
///
/// A read failure is reported as a structural error for that document.
pub fn lint_file(path: &Path, schema: &Schema) -> Vec<ValidationError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "failed to read skill document");
            return vec![ValidationError::new(
                path,
                RULE_UNREADABLE,
                Category::Structural,
                format!("failed to read document: {e}"),
            )];
        }
    };

    let errors = validate::validate_document(path, &content, schema);
    tracing::debug!(file = %path.display(), errors = errors.len(), "validated");
    errors
}
