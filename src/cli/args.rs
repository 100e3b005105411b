//! Command line argument parsing for the Marquee CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::recommend::DEFAULT_TOP_N;

/// Marquee - content-based movie recommendations from the command line.
#[derive(Parser, Debug, Clone)]
#[command(name = "marquee")]
#[command(about = "Content-based movie recommendation engine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MarqueeArgs {
    /// Path to the catalogue JSON file
    #[arg(
        short,
        long,
        value_name = "CATALOGUE_FILE",
        env = "MARQUEE_CATALOGUE",
        global = true,
        default_value = "catalogue.json"
    )]
    pub catalogue: PathBuf,

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

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MarqueeArgs {
    /// Get the effective verbosity level.
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

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text for people
    Human,
    /// JSON for machines
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Recommend movies similar to a title
    Recommend(RecommendArgs),

    /// Resolve free text to a single catalogue entry
    Resolve(ResolveArgs),

    /// Search titles and tags
    Search(SearchArgs),

    /// Show catalogue statistics
    Stats,
}

/// Arguments for the recommend command
#[derive(Parser, Debug, Clone)]
pub struct RecommendArgs {
    /// Movie title to recommend from (partial or mistyped input is fine)
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Number of recommendations to return
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,
}

/// Arguments for the resolve command
#[derive(Parser, Debug, Clone)]
pub struct ResolveArgs {
    /// Free-form title text to resolve
    #[arg(value_name = "TITLE")]
    pub title: String,
}

/// Arguments for the search command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Query matched against titles and tag text
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results
    #[arg(short, long, default_value_t = 15)]
    pub limit: usize,
}
