mod cli;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use oxidized_frontmatter::{config, lint, output, validate};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_rules {
        print_rules();
        return;
    }

    let config = config::Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });
    let schema = config.schema.compile().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    let root = cli.root.unwrap_or(config.discovery.root);
    let report = match lint::run_lint(&root, &config.discovery.file_name, &schema) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let formatted = output::format_report(&report, &cli.format);

    if let Some(out_path) = cli.output {
        std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
            eprintln!("Error writing output: {e}");
            std::process::exit(2);
        });
        eprintln!("Output written to {}", out_path.display());
    } else if !report.passed && matches!(cli.format, output::OutputFormat::Pretty) {
        eprint!("{formatted}");
    } else {
        print!("{formatted}");
    }

    std::process::exit(if report.passed { 0 } else { 1 });
}

/// Initialize tracing on stderr. `RUST_LOG` overrides the `-v` count.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,oxidized_frontmatter=info".to_string(),
            2 => "info,oxidized_frontmatter=debug".to_string(),
            _ => "debug,oxidized_frontmatter=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn print_rules() {
    let rules = validate::rules();
    println!("{}", "Validation Rules".bold().underline());
    println!();

    for rule in &rules {
        println!(
            "  [{category:<10}] {id:<36} {message}",
            category = rule.category.to_string().bold(),
            id = rule.id,
            message = rule.message,
        );
    }

    println!();
    println!("  Total: {} rules", rules.len());
}
