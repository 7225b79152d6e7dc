use std::fs;
use std::path::Path;

use super::CsvgateConfig;

/// Load configuration, preferring an explicit path over `.csvgate.toml`
/// at the input root. Missing files and parse failures degrade to
/// defaults; a parse failure is reported but never aborts the run.
pub fn load_config(explicit: Option<&Path>, root: &Path) -> CsvgateConfig {
    let candidate = match explicit {
        Some(path) => path.to_path_buf(),
        None => root.join(".csvgate.toml"),
    };

    match try_load_config_from_path(&candidate) {
        Some(config) => config,
        None => CsvgateConfig::default(),
    }
}

fn try_load_config_from_path(config_path: &Path) -> Option<CsvgateConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    fs::read_to_string(path)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> Result<CsvgateConfig, String> {
    toml::from_str::<CsvgateConfig>(contents)
        .map_err(|e| format!("Failed to parse .csvgate.toml: {}", e))
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}
