use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skill-census",
    version,
    about = "Count and validate SKILL.md definitions in a skills tree"
)]
pub struct Cli {
    /// Custom config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count skills per category
    Count {
        /// Skills directory (defaults to <root>/skills from config)
        #[arg(long)]
        skills_dir: Option<PathBuf>,
    },

    /// Validate every skill and print a summary table
    Validate {
        /// Skills directory (defaults to <root>/skills from config)
        #[arg(long)]
        skills_dir: Option<PathBuf>,
    },
}
