use clap::Parser;
use oxidized_frontmatter::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "oxidized-frontmatter",
    version,
    about = "Validate YAML frontmatter of agent skill definitions"
)]
pub struct Cli {
    /// Skills root directory [default: from config, else .codex/skills]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "pretty", value_enum)]
    pub format: OutputFormat,

    /// Write output to file instead of stdout/stderr
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// List all validation rules and exit
    #[arg(long)]
    pub list_rules: bool,
}
