mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use skill_census::{config::Config, report};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    let result = match cli.command {
        Commands::Count { skills_dir } => {
            report::count_skills(&resolve_skills_dir(skills_dir, &config))
        }
        Commands::Validate { skills_dir } => {
            report::validate_skills(&resolve_skills_dir(skills_dir, &config))
        }
    };

    match result {
        Ok(outcome) => {
            print!("{}", outcome.output);
            std::process::exit(outcome.exit_code);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}

/// `--skills-dir` wins over the config file.
fn resolve_skills_dir(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    let dir = flag.unwrap_or_else(|| config.skills_path());
    tracing::debug!(skills_dir = %dir.display(), "scanning");
    dir
}

/// Logs go to stderr so stdout carries only the report.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .init();
}
