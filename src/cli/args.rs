//! Command line argument parsing for the docsearch CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// docsearch - search a directory of text documents
#[derive(Parser, Debug, Clone)]
#[command(name = "docsearch")]
#[command(about = "Search a directory of text documents by word, phrase or prefix")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DocSearchArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Corpus configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", env = "DOCSEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DocSearchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find a word or phrase
    Search(SearchArgs),

    /// Suggest a completion for a prefix
    Complete(CompleteArgs),

    /// Show corpus statistics
    Stats(StatsArgs),
}

/// Where the documents come from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory holding the documents
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Load every regular file, not only `.txt` files
    #[arg(long)]
    pub all: bool,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Word or phrase to find
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Words of context to show on each side of a hit
    #[arg(short, long, default_value = "5")]
    pub context: usize,
}

/// Arguments for autocomplete
#[derive(Parser, Debug, Clone)]
pub struct CompleteArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,
}

/// Arguments for statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
