pub mod errors;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Per-file gate verdict. Declaration order gives the severity
/// ordering used everywhere: `Fail > Warn > Pass`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FileStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "WARN")]
    Warn,
    #[serde(rename = "FAIL")]
    Fail,
}

impl FileStatus {
    pub fn worst(self, other: FileStatus) -> FileStatus {
        self.max(other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Pass => "PASS",
            FileStatus::Warn => "WARN",
            FileStatus::Fail => "FAIL",
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field separator candidates. The set is closed at the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delimiter {
    Comma,
    Semicolon,
    Tab,
}

impl Delimiter {
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Semicolon => ';',
            Delimiter::Tab => '\t',
        }
    }

    /// Literal form used in reports: `,`, `;`, or a tab character.
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Semicolon => ";",
            Delimiter::Tab => "\t",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One input file: relative path plus raw bytes. Discovered by the
/// walker, consumed exactly once by the engine, never mutated.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub rel_path: String,
    pub bytes: Vec<u8>,
}

impl Artifact {
    pub fn new(rel_path: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            rel_path: rel_path.into(),
            bytes,
        }
    }

    /// Relative path in report form: forward slashes on every platform.
    pub fn rel_path_for(root: &Path, path: &Path) -> String {
        let rel = path.strip_prefix(root).unwrap_or(path);
        rel.to_string_lossy().replace('\\', "/")
    }
}

/// Bounded duplicate-row estimate. `scanned < rows` on the parent
/// result signals that this is an estimate, not an exhaustive count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateEstimate {
    pub scanned: usize,
    pub dups: usize,
}

impl DuplicateEstimate {
    pub fn ratio(&self) -> f64 {
        if self.scanned == 0 {
            0.0
        } else {
            self.dups as f64 / self.scanned as f64
        }
    }
}

/// Mutable accumulator filled by the scanner and duplicate estimator
/// while one artifact is evaluated. Owned exclusively by that file's
/// evaluation; the status reducer consumes it to build a `FileResult`.
///
/// Invariants: `empty_rows <= rows` and `dups <= scanned <= rows`.
#[derive(Debug, Clone, Default)]
pub struct EvalSignals {
    pub rows: usize,
    pub cols: Option<usize>,
    pub empty_rows: usize,
    pub drift_rows: usize,
    pub duplicate_rows_est: DuplicateEstimate,
    pub lossy_decode: bool,
    pub delimiter_fallback: bool,
    pub notes: Vec<String>,
    pub errors: Vec<String>,
}

/// Immutable per-file snapshot, created once by the status reducer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    pub file: String,
    pub status: FileStatus,
    pub rows: usize,
    pub cols: usize,
    pub detected_delimiter: String,
    pub encoding_used: String,
    pub empty_rows: usize,
    pub duplicate_rows_est: DuplicateEstimate,
    pub notes: Vec<String>,
    pub errors: Vec<String>,
}

/// Immutable run-level aggregate. `files` preserves discovery order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub generated_at: String,
    pub input_root: PathBuf,
    pub overall_status: FileStatus,
    pub pass_count: usize,
    pub warn_count: usize,
    pub fail_count: usize,
    pub files: Vec<FileResult>,
}
