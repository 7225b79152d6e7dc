use anyhow::Result;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::{load_config, GateThresholds};
use crate::core::errors::Error;
use crate::core::RunResult;
use crate::engine;
use crate::io::walker;
use crate::output;

pub struct EvaluateConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub empty_row_warn_fraction: Option<f64>,
    pub duplicate_warn_ratio: Option<f64>,
    pub duplicate_scan_cap: Option<usize>,
    pub ignore_patterns: Option<Vec<String>>,
}

/// Run the gate over an input root and render the report. Returns the
/// run result so the caller decides the process exit status.
pub fn evaluate(config: EvaluateConfig) -> Result<RunResult> {
    if let Some(path) = &config.config {
        if !path.is_file() {
            return Err(Error::Configuration(format!(
                "config file not found: {}",
                path.display()
            ))
            .into());
        }
    }

    let file_config = load_config(config.config.as_deref(), &config.path);
    let thresholds = merge_thresholds(file_config.thresholds, &config);
    let ignore_patterns = config
        .ignore_patterns
        .clone()
        .unwrap_or(file_config.ignore.patterns);

    let paths = walker::find_csv_files(&config.path, &ignore_patterns)?;
    log::debug!("discovered {} csv files", paths.len());

    let run = engine::evaluate_paths(&config.path, &paths, &thresholds);
    output::output_run_result(&run, config.format, config.output.clone())?;
    Ok(run)
}

/// CLI flags override file-level threshold values.
fn merge_thresholds(base: GateThresholds, config: &EvaluateConfig) -> GateThresholds {
    GateThresholds {
        empty_row_warn_fraction: config
            .empty_row_warn_fraction
            .unwrap_or(base.empty_row_warn_fraction),
        duplicate_warn_ratio: config
            .duplicate_warn_ratio
            .unwrap_or(base.duplicate_warn_ratio),
        duplicate_scan_cap: config.duplicate_scan_cap.unwrap_or(base.duplicate_scan_cap),
        delimiter_sample_lines: base.delimiter_sample_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_file_thresholds() {
        let base = GateThresholds {
            empty_row_warn_fraction: 0.1,
            duplicate_warn_ratio: 0.2,
            duplicate_scan_cap: 100,
            delimiter_sample_lines: 5,
        };
        let config = EvaluateConfig {
            path: PathBuf::from("."),
            format: OutputFormat::Json,
            output: None,
            config: None,
            empty_row_warn_fraction: Some(0.5),
            duplicate_warn_ratio: None,
            duplicate_scan_cap: Some(42),
            ignore_patterns: None,
        };
        let merged = merge_thresholds(base, &config);
        assert_eq!(merged.empty_row_warn_fraction, 0.5);
        assert_eq!(merged.duplicate_warn_ratio, 0.2);
        assert_eq!(merged.duplicate_scan_cap, 42);
        assert_eq!(merged.delimiter_sample_lines, 5);
    }
}
