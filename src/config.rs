//! Configuration loading and management.
//!
//! Provides the TOML-based configuration file and the compiled [`Schema`]
//! the validator checks frontmatter against.
//!
//! # Configuration file
//!
//! The default configuration file is `oxidized-frontmatter.toml` in the
//! current working directory. Every field is optional:
//!
//! ```toml
//! [discovery]
//! root = ".codex/skills"
//! file_name = "SKILL.md"
//!
//! [schema]
//! reserved_names = ["anthropic", "claude"]
//! description_max_chars = 1024
//! ```
//!
//! ```rust,no_run
//! use oxidized_frontmatter::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! let schema = config.schema.compile().expect("invalid schema patterns");
//! assert!(schema.is_reserved("claude"));
//! ```

use regex::Regex;
use std::path::{Path, PathBuf};

/// Default skills root, relative to the working directory.
pub const DEFAULT_SKILLS_ROOT: &str = ".codex/skills";

/// File expected inside each skill directory.
pub const DEFAULT_SKILL_FILE: &str = "SKILL.md";

/// Name of the auto-detected config file.
pub const DEFAULT_CONFIG_FILE: &str = "oxidized-frontmatter.toml";

/// Brand terms a skill may not be named after (exact, case-sensitive).
pub const RESERVED_NAMES: &[&str] = &["anthropic", "claude"];

/// Keys the frontmatter mapping must contain, and the only keys allowed.
/// Sorted; the validator looks `name` and `description` up directly.
pub const REQUIRED_KEYS: &[&str] = &["description", "name"];

/// Lowercase letters, digits and hyphens, 1 to 64 characters.
pub const NAME_PATTERN: &str = r"^[a-z0-9-]{1,64}$";

/// Anything shaped like a markup tag.
pub const MARKUP_TAG_PATTERN: &str = r"<[^>]+>";

pub const DESCRIPTION_MAX_CHARS: usize = 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid {field} pattern '{pattern}': {source}")]
    InvalidPattern {
        field: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Main configuration.
///
/// Loaded from a TOML file (typically `oxidized-frontmatter.toml`). All
/// fields carry defaults so the file can be omitted entirely.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Where skill documents are found.
    pub discovery: DiscoveryConfig,
    /// What their frontmatter must look like.
    pub schema: SchemaConfig,
}

#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Directory whose immediate subdirectories are skills.
    pub root: PathBuf,
    /// File name looked up inside each skill directory.
    pub file_name: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        DiscoveryConfig {
            root: PathBuf::from(DEFAULT_SKILLS_ROOT),
            file_name: DEFAULT_SKILL_FILE.to_string(),
        }
    }
}

/// Uncompiled schema settings, as written in the config file.
///
/// The key set is fixed to [`REQUIRED_KEYS`]; unknown fields are rejected.
/// Call [`SchemaConfig::compile`] to validate the patterns and obtain a
/// [`Schema`].
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    pub reserved_names: Vec<String>,
    pub name_pattern: String,
    pub markup_pattern: String,
    pub description_max_chars: usize,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        SchemaConfig {
            reserved_names: RESERVED_NAMES.iter().map(|s| s.to_string()).collect(),
            name_pattern: NAME_PATTERN.to_string(),
            markup_pattern: MARKUP_TAG_PATTERN.to_string(),
            description_max_chars: DESCRIPTION_MAX_CHARS,
        }
    }
}

impl SchemaConfig {
    /// Compiles the name and markup patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] when either regex fails to
    /// compile.
    pub fn compile(&self) -> Result<Schema, ConfigError> {
        let name_pattern =
            Regex::new(&self.name_pattern).map_err(|source| ConfigError::InvalidPattern {
                field: "name_pattern",
                pattern: self.name_pattern.clone(),
                source,
            })?;
        let markup_pattern =
            Regex::new(&self.markup_pattern).map_err(|source| ConfigError::InvalidPattern {
                field: "markup_pattern",
                pattern: self.markup_pattern.clone(),
                source,
            })?;

        Ok(Schema {
            reserved_names: self.reserved_names.clone(),
            name_pattern,
            markup_pattern,
            description_max_chars: self.description_max_chars,
        })
    }
}

/// Compiled frontmatter schema used by [`validate_document`](crate::validate::validate_document).
#[derive(Debug, Clone)]
pub struct Schema {
    reserved_names: Vec<String>,
    name_pattern: Regex,
    markup_pattern: Regex,
    description_max_chars: usize,
}

impl Default for Schema {
    fn default() -> Self {
        // The built-in patterns are constants known to compile.
        SchemaConfig::default()
            .compile()
            .unwrap_or_else(|e| unreachable!("built-in schema failed to compile: {e}"))
    }
}

impl Schema {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_names.iter().any(|r| r == name)
    }

    /// Sorted set of keys the mapping must have exactly.
    pub fn required_keys(&self) -> &'static [&'static str] {
        REQUIRED_KEYS
    }

    pub fn name_pattern(&self) -> &Regex {
        &self.name_pattern
    }

    pub fn markup_pattern(&self) -> &Regex {
        &self.markup_pattern
    }

    pub fn description_max_chars(&self) -> usize {
        self.description_max_chars
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `oxidized-frontmatter.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the explicit path does not exist, the
    /// file cannot be read, or the TOML fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        let config_path = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => return Err(ConfigError::NotFound(p.to_path_buf())),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        match config_path {
            Some(path) => {
                tracing::debug!(config = %path.display(), "loading configuration");
                let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
                toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
            }
            None => Ok(Config::default()),
        }
    }
}
