use std::path::Path;

use crate::core::{FileResult, FileStatus, RunResult};

/// Timestamp format for `generated_at`: seconds precision, no zone.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Fold an ordered sequence of file results into the run-level result.
/// Tallies and the overall status are derived from the immutable
/// sequence here, never tracked incrementally elsewhere. An empty file
/// set is itself a FAIL: a run with nothing to evaluate cannot pass.
pub fn aggregate(input_root: &Path, files: Vec<FileResult>) -> RunResult {
    let generated_at = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    aggregate_at(generated_at, input_root, files)
}

/// Deterministic core with an injected timestamp, for tests.
pub(crate) fn aggregate_at(
    generated_at: String,
    input_root: &Path,
    files: Vec<FileResult>,
) -> RunResult {
    let (pass_count, warn_count, fail_count) =
        files.iter().fold((0, 0, 0), |(p, w, f), result| {
            match result.status {
                FileStatus::Pass => (p + 1, w, f),
                FileStatus::Warn => (p, w + 1, f),
                FileStatus::Fail => (p, w, f + 1),
            }
        });

    let overall_status = match files.iter().map(|f| f.status).max() {
        Some(status) => status,
        None => {
            log::warn!(
                "no csv files discovered under {}",
                input_root.display()
            );
            FileStatus::Fail
        }
    };

    RunResult {
        generated_at,
        input_root: input_root.to_path_buf(),
        overall_status,
        pass_count,
        warn_count,
        fail_count,
        files,
    }
}
