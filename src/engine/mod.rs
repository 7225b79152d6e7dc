//! The evaluation engine: bytes in, structural verdicts out.
//!
//! Per artifact the pipeline runs encoding detection, delimiter
//! inference, the structural scan and the duplicate estimate over the
//! same decoded text, then reduces the signals to a `FileResult`.
//! Files are independent: each evaluation owns its accumulator and
//! touches no shared state, so callers may parallelize per file.

pub mod aggregate;
pub mod delimiter;
pub mod duplicates;
pub mod encoding;
pub mod reduce;
pub mod scanner;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::GateThresholds;
use crate::core::errors::Result;
use crate::core::{Artifact, DuplicateEstimate, EvalSignals, FileResult, FileStatus, RunResult};
use crate::io::walker;

pub use aggregate::aggregate;
pub use delimiter::{detect_delimiter, Detection, DELIMITER_CANDIDATES};
pub use duplicates::estimate_duplicates;
pub use encoding::{decode_artifact, Decoded};
pub use reduce::finalize;
pub use scanner::{scan_rows, summarize_structure, ScannedRow, StructuralSummary};

/// Evaluate one artifact. Never fails: structural problems become
/// notes/errors on the returned result.
pub fn evaluate_artifact(artifact: &Artifact, thresholds: &GateThresholds) -> FileResult {
    let decoded = decode_artifact(&artifact.bytes);
    let detection = detect_delimiter(&decoded.text, thresholds.delimiter_sample_lines);
    let structure = summarize_structure(&decoded.text, detection.delimiter);
    let duplicate_rows_est = estimate_duplicates(
        scan_rows(&decoded.text, detection.delimiter).map(|row| row.raw),
        thresholds.duplicate_scan_cap,
    );

    let signals = EvalSignals {
        rows: structure.rows,
        cols: structure.cols,
        empty_rows: structure.empty_rows,
        drift_rows: structure.drift_rows,
        duplicate_rows_est,
        lossy_decode: decoded.lossy,
        delimiter_fallback: detection.fallback,
        notes: vec![],
        errors: vec![],
    };

    finalize(
        artifact.rel_path.clone(),
        detection.delimiter.as_str().to_string(),
        decoded.encoding_used,
        signals,
        thresholds,
    )
}

/// Evaluate already-discovered paths in the given order. A file that
/// cannot be read yields a FAIL result for that file only; sibling
/// evaluations are unaffected.
pub fn evaluate_paths(root: &Path, paths: &[PathBuf], thresholds: &GateThresholds) -> RunResult {
    let results: Vec<FileResult> = paths
        .iter()
        .map(|path| {
            let rel_path = Artifact::rel_path_for(root, path);
            log::debug!("evaluating {}", rel_path);
            match fs::read(path) {
                Ok(bytes) => evaluate_artifact(&Artifact::new(rel_path, bytes), thresholds),
                Err(e) => unreadable_file_result(rel_path, &e),
            }
        })
        .collect();

    aggregate(root, results)
}

/// The public contract: thresholds in, run result out. Discovery uses
/// the default walker (lexicographic order, no ignore patterns).
pub fn evaluate_root(root: &Path, thresholds: &GateThresholds) -> Result<RunResult> {
    if !root.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("input root not found: {}", root.display()),
        )
        .into());
    }
    let paths = walker::find_csv_files(root, &[])?;
    Ok(evaluate_paths(root, &paths, thresholds))
}

fn unreadable_file_result(rel_path: String, error: &std::io::Error) -> FileResult {
    FileResult {
        file: rel_path,
        status: FileStatus::Fail,
        rows: 0,
        cols: 0,
        detected_delimiter: String::new(),
        encoding_used: String::new(),
        empty_rows: 0,
        duplicate_rows_est: DuplicateEstimate::default(),
        notes: vec![],
        errors: vec![format!("failed to read file: {}", error)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn evaluate(bytes: &[u8]) -> FileResult {
        let artifact = Artifact::new("test.csv", bytes.to_vec());
        evaluate_artifact(&artifact, &GateThresholds::default())
    }

    #[test]
    fn clean_comma_file_passes() {
        let text = indoc! {"
            id,name,score
            1,alice,10
            2,bob,20
            3,carol,30
            4,dave,40
        "};
        let result = evaluate(text.as_bytes());
        assert_eq!(result.status, FileStatus::Pass);
        assert_eq!(result.rows, 5);
        assert_eq!(result.cols, 3);
        assert_eq!(result.detected_delimiter, ",");
        assert_eq!(result.encoding_used, "utf-8-sig");
        assert_eq!(result.duplicate_rows_est.scanned, 5);
    }

    #[test]
    fn blank_only_file_fails_with_no_rows() {
        let result = evaluate(b"\n\n\n");
        assert_eq!(result.status, FileStatus::Fail);
        assert_eq!(result.rows, 0);
        assert!(result.errors.contains(&"no rows detected".to_string()));
    }

    #[test]
    fn duplicate_heavy_file_warns() {
        // 4 of 10 rows repeat an earlier row (ratio 0.40)
        let text = indoc! {"
            a,1
            b,2
            c,3
            d,4
            e,5
            f,6
            a,1
            b,2
            c,3
            d,4
        "};
        let result = evaluate(text.as_bytes());
        assert_eq!(result.status, FileStatus::Warn);
        assert_eq!(result.duplicate_rows_est.dups, 4);
        assert!(result.notes.iter().any(|n| n.contains("ratio 0.40")));
    }

    #[test]
    fn lossy_decode_warns_and_labels() {
        let result = evaluate(b"a,\xFF\xFF\nb,2\n");
        assert!(result.status >= FileStatus::Warn);
        assert!(result.encoding_used.ends_with("(replace)"));
    }

    #[test]
    fn idempotent_for_same_bytes() {
        let bytes = b"a,b\n1,2\n1,2\n , \n";
        let first = evaluate(bytes);
        let second = evaluate(bytes);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn scan_cap_is_reported_as_estimate() {
        let thresholds = GateThresholds {
            duplicate_scan_cap: 3,
            ..Default::default()
        };
        let artifact = Artifact::new("t.csv", b"a,1\nb,2\nc,3\nd,4\ne,5\n".to_vec());
        let result = evaluate_artifact(&artifact, &thresholds);
        assert_eq!(result.rows, 5);
        assert_eq!(result.duplicate_rows_est.scanned, 3);
        assert!(result.duplicate_rows_est.scanned < result.rows);
        assert!(result.notes.iter().any(|n| n.contains("truncated")));
    }
}
