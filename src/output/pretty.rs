//! Human-readable formatter.
//!
//! A failing report renders as a header followed by one
//! `- <path>: <message>` line per error; the binary sends it to stderr. A
//! passing report is a single `Validated N skill(s).` line for stdout.
//!
//! Paths under the current directory are shown relative to it.

use crate::finding::LintReport;
use colored::Colorize;
use std::path::Path;

/// Formats a [`LintReport`] as terminal text.
pub fn format(report: &LintReport) -> String {
    if report.passed {
        return format!(
            "{}\n",
            format!("Validated {} skill(s).", report.documents_validated()).green()
        );
    }

    let cwd = std::env::current_dir().ok();

    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        "Skill frontmatter validation failed:".red().bold()
    ));
    for error in &report.errors {
        let path = match cwd.as_deref() {
            Some(base) => relative_to(&error.file, base),
            None => &error.file,
        };
        out.push_str(&format!("- {}: {}\n", path.display(), error.message));
    }
    out.push_str(&format!(
        "\n{} errors in {} of {} skill(s)\n",
        report.errors.len(),
        report.failed_documents(),
        report.documents_validated(),
    ));
    out
}

/// Strips `base` from an absolute `path` that lies beneath it.
///
/// Relative paths and paths outside `base` are returned unchanged.
pub fn relative_to<'a>(path: &'a Path, base: &Path) -> &'a Path {
    if !path.is_absolute() {
        return path;
    }
    path.strip_prefix(base).unwrap_or(path)
}
