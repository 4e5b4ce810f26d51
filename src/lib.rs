//! # oxidized-frontmatter
//!
//! Frontmatter linting for agent skill definitions.
//!
//! Each skill lives in its own directory under a skills root and carries a
//! `SKILL.md` whose first lines are a YAML block between `---` markers. The
//! block must be a mapping with exactly a `name` and a `description`, the name
//! must be short lowercase-kebab-case and not a reserved word, and the
//! description must be bounded in length and free of markup tags.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use oxidized_frontmatter::{config::Config, lint, output};
//!
//! let config = Config::load(None).expect("failed to load config");
//! let schema = config.schema.compile().expect("invalid schema");
//! let report = lint::run_lint(Path::new(".codex/skills"), "SKILL.md", &schema)
//!     .expect("skills directory not found");
//!
//! print!("{}", output::format_report(&report, &output::OutputFormat::Pretty));
//! ```
//!
//! ## Architecture
//!
//! 1. **[`config`]**: TOML configuration and the compiled [`config::Schema`].
//! 2. **[`frontmatter`]**: split the `---` block off a document and parse it.
//! 3. **[`validate`]**: schema checks and the rule catalogue.
//! 4. **[`discovery`]** and **[`lint`]**: find documents and validate them all.
//! 5. **[`finding`]**: [`finding::ValidationError`] and [`finding::LintReport`].
//! 6. **[`output`]**: pretty text, JSON, or [SARIF].
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod config;
pub mod discovery;
pub mod finding;
pub mod frontmatter;
pub mod lint;
pub mod output;
pub mod validate;
