pub mod csv;
pub mod json;
pub mod terminal;

pub use csv::{output_csv, render_csv_report};
pub use json::output_json;
pub use terminal::{output_terminal, render_terminal_report};

use crate::cli::OutputFormat;
use crate::core::RunResult;
use anyhow::Result;
use std::path::PathBuf;

/// Render the run result in the selected format, to stdout or a file.
pub fn output_run_result(
    run: &RunResult,
    format: OutputFormat,
    output_file: Option<PathBuf>,
) -> Result<()> {
    match format {
        OutputFormat::Json => output_json(run, output_file),
        OutputFormat::Csv => output_csv(run, output_file),
        OutputFormat::Terminal => output_terminal(run, output_file),
    }
}
