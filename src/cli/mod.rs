//! CLI module for Sibyl.
//!
//! Provides command-line argument parsing for the sibyl binary. Uses clap
//! for parsing and owo-colors for colored terminal output.

pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// Sibyl - deterministic rule-based query answering
///
/// Answers one natural-language question by routing it through a fixed set
/// of tools (calculator, weather, knowledge base, job search) in priority
/// order, threading intermediate results through a shared context.
#[derive(Parser, Debug)]
#[command(
    name = "sibyl",
    author = "Dirmacs <build@dirmacs.com>",
    version,
    about = "Deterministic rule-based query answering",
    after_help = "EXAMPLES:\n    \
                  sibyl \"what is the temperature in paris\"\n    \
                  sibyl \"add 10 to the average temperature in paris and london\"\n    \
                  sibyl --json \"software engineer jobs at google posted recently\""
)]
pub struct Cli {
    /// The question to answer; multiple words are joined with spaces
    #[arg(required = true, trailing_var_arg = true)]
    pub query: Vec<String>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "sibyl.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose (debug-level) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the answer as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
