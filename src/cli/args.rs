//! Command line argument parsing for the wordfreq CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// wordfreq - count word occurrences across plain-text files
#[derive(Parser, Debug, Clone)]
#[command(name = "wordfreq")]
#[command(about = "Count word occurrences across plain-text files, ranked by frequency")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordFreqArgs {
    /// Directory containing the text files to count
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// File extension to match, without the leading dot
    #[arg(short, long, default_value = "txt")]
    pub extension: String,

    /// Show only the N most frequent words
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Process documents sequentially instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Number of worker threads for parallel processing
    #[arg(short, long, conflicts_with = "sequential")]
    pub threads: Option<usize>,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl WordFreqArgs {
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

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
