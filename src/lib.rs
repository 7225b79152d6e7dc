// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod io;
pub mod output;

// Re-export commonly used types
pub use crate::core::{
    Artifact, Delimiter, DuplicateEstimate, EvalSignals, FileResult, FileStatus, RunResult,
};

pub use crate::config::{CsvgateConfig, GateThresholds};

pub use crate::engine::{evaluate_artifact, evaluate_paths, evaluate_root};

pub use crate::io::walker::find_csv_files;
