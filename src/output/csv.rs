//! CSV summary renderer: one line per evaluated file.
//!
//! Follows RFC 4180 for escaping. Notes and errors are joined with `|`
//! so each file stays on a single line.

use crate::core::RunResult;
use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

const CSV_HEADER: &str =
    "file,status,rows,cols,detected_delimiter,encoding_used,empty_rows,dup_scanned,dup_count,notes,errors";

pub fn render_csv_report(run: &RunResult) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');

    for file in &run.files {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{}\n",
            escape_csv_field(&file.file),
            file.status,
            file.rows,
            file.cols,
            escape_csv_field(&file.detected_delimiter),
            escape_csv_field(&file.encoding_used),
            file.empty_rows,
            file.duplicate_rows_est.scanned,
            file.duplicate_rows_est.dups,
            escape_csv_field(&file.notes.join("|")),
            escape_csv_field(&file.errors.join("|")),
        ));
    }

    out
}

pub fn output_csv(run: &RunResult, output_file: Option<PathBuf>) -> Result<()> {
    let report = render_csv_report(run);
    if let Some(path) = output_file {
        if let Some(parent) = path.parent() {
            crate::io::ensure_dir(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(report.as_bytes())?;
    } else {
        print!("{report}");
    }
    Ok(())
}

/// Fields containing commas, double quotes, or newlines are quoted;
/// embedded quotes are doubled.
fn escape_csv_field(s: &str) -> String {
    let needs_quoting = s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r');

    if needs_quoting {
        let escaped = s.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        s.to_string()
    }
}
