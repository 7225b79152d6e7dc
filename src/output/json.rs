use crate::core::RunResult;
use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub fn output_json(run: &RunResult, output_file: Option<PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(run)?;
    if let Some(path) = output_file {
        if let Some(parent) = path.parent() {
            crate::io::ensure_dir(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(json.as_bytes())?;
    } else {
        println!("{json}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FileStatus;
    use crate::engine::aggregate;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_output_json_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested_path = temp_dir
            .path()
            .join("nested")
            .join("subdirs")
            .join("report.json");

        let run = aggregate(Path::new("/in"), vec![]);

        let result = output_json(&run, Some(nested_path.clone()));
        assert!(
            result.is_ok(),
            "Failed to write JSON to nested path: {:?}",
            result.err()
        );
        assert!(
            nested_path.exists(),
            "Output file was not created at nested path"
        );

        let content = fs::read_to_string(&nested_path).unwrap();
        assert!(!content.is_empty(), "Output file is empty");
    }

    #[test]
    fn json_shape_matches_the_report_contract() {
        let run = aggregate(Path::new("/in"), vec![]);
        let value: serde_json::Value = serde_json::to_value(&run).unwrap();
        for key in [
            "generated_at",
            "input_root",
            "overall_status",
            "pass_count",
            "warn_count",
            "fail_count",
            "files",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(value["overall_status"], "FAIL");
        assert_eq!(run.overall_status, FileStatus::Fail);
    }
}
