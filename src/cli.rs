use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Terminal,
    /// Full report as JSON
    Json,
    /// One-line-per-file CSV summary
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "csvgate")]
#[command(about = "Structural quality gate for CSV artifacts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate all CSV files under a directory
    Evaluate {
        /// Input root to scan for *.csv files
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to <path>/.csvgate.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Empty-row fraction above which a file WARNs
        #[arg(long)]
        empty_row_warn_fraction: Option<f64>,

        /// Duplicate ratio (dups/scanned) above which a file WARNs
        #[arg(long)]
        duplicate_warn_ratio: Option<f64>,

        /// Maximum rows scanned by the duplicate estimator
        #[arg(long)]
        duplicate_scan_cap: Option<usize>,

        /// Glob patterns of files to skip
        #[arg(long = "ignore", value_delimiter = ',')]
        ignore_patterns: Option<Vec<String>>,
    },

    /// Create a default .csvgate.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
