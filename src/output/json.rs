//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document with the lint root, a per-category
//! summary, and every validation error in report order.

use crate::finding::{LintReport, ValidationError};
use std::path::{Path, PathBuf};

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    root: &'a Path,
    lint_timestamp: &'a str,
    passed: bool,
    summary: Summary,
    documents: &'a [PathBuf],
    errors: &'a [ValidationError],
}

#[derive(serde::Serialize)]
struct Summary {
    documents: usize,
    failed_documents: usize,
    errors: usize,
    structural: usize,
    syntax: usize,
    shape: usize,
    field: usize,
}

/// Formats a [`LintReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &LintReport) -> String {
    let (structural, syntax, shape, field) = report.count_by_category();
    let output = JsonOutput {
        root: &report.root,
        lint_timestamp: &report.lint_timestamp,
        passed: report.passed,
        summary: Summary {
            documents: report.documents_validated(),
            failed_documents: report.failed_documents(),
            errors: report.errors.len(),
            structural,
            syntax,
            shape,
            field,
        },
        documents: &report.documents,
        errors: &report.errors,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
