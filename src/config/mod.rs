pub mod loader;

pub use loader::load_config;

use serde::{Deserialize, Serialize};

/// Gate strictness thresholds. All values are injectable via
/// `.csvgate.toml` or CLI flags; defaults match the behavior of
/// warning on any empty or duplicate row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateThresholds {
    /// Empty-row fraction above which a file WARNs (default: 0.0)
    #[serde(default = "default_empty_row_warn_fraction")]
    pub empty_row_warn_fraction: f64,

    /// Duplicate ratio (dups / scanned) above which a file WARNs (default: 0.0)
    #[serde(default = "default_duplicate_warn_ratio")]
    pub duplicate_warn_ratio: f64,

    /// Maximum rows considered by the duplicate estimator (default: 200000)
    #[serde(default = "default_duplicate_scan_cap")]
    pub duplicate_scan_cap: usize,

    /// Lines sampled by delimiter detection (default: 20)
    #[serde(default = "default_delimiter_sample_lines")]
    pub delimiter_sample_lines: usize,
}

impl Default for GateThresholds {
    fn default() -> Self {
        Self {
            empty_row_warn_fraction: default_empty_row_warn_fraction(),
            duplicate_warn_ratio: default_duplicate_warn_ratio(),
            duplicate_scan_cap: default_duplicate_scan_cap(),
            delimiter_sample_lines: default_delimiter_sample_lines(),
        }
    }
}

fn default_empty_row_warn_fraction() -> f64 {
    0.0
}
fn default_duplicate_warn_ratio() -> f64 {
    0.0
}
fn default_duplicate_scan_cap() -> usize {
    200_000
}
fn default_delimiter_sample_lines() -> usize {
    20
}

/// File discovery ignore patterns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IgnoreConfig {
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Root configuration loaded from `.csvgate.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CsvgateConfig {
    #[serde(default)]
    pub thresholds: GateThresholds,

    #[serde(default)]
    pub ignore: IgnoreConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_warn_on_any_degradation() {
        let t = GateThresholds::default();
        assert_eq!(t.empty_row_warn_fraction, 0.0);
        assert_eq!(t.duplicate_warn_ratio, 0.0);
        assert_eq!(t.duplicate_scan_cap, 200_000);
        assert_eq!(t.delimiter_sample_lines, 20);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: CsvgateConfig =
            toml::from_str("[thresholds]\nduplicate_scan_cap = 500\n").unwrap();
        assert_eq!(config.thresholds.duplicate_scan_cap, 500);
        assert_eq!(config.thresholds.empty_row_warn_fraction, 0.0);
        assert!(config.ignore.patterns.is_empty());
    }
}
