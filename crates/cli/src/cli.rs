//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Search target files for a fixed set of patterns in one pass
#[derive(Parser)]
#[command(name = "msearch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File with one search pattern per line (TAB separates an optional tag)
    #[arg(
        short = 'p',
        long = "patterns",
        value_name = "FILE",
        env = "MSEARCH_PATTERNS"
    )]
    pub patterns: PathBuf,

    /// Target files to scan
    #[arg(value_name = "TARGET", required = true)]
    pub targets: Vec<PathBuf>,

    /// Keep only matches on word boundaries
    #[arg(long)]
    pub word_boundaries: bool,

    /// Report only the first match per tag
    #[arg(long)]
    pub unique: bool,

    /// Collapse whitespace and punctuation runs before scanning
    #[arg(long)]
    pub normalize: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Print build and scan timings to stderr
    #[arg(long)]
    pub timing: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
