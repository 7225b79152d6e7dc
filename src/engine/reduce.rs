use crate::config::GateThresholds;
use crate::core::{EvalSignals, FileResult, FileStatus};

/// Reduce one file's accumulated signals into an immutable
/// `FileResult`. Fatal rules decide FAIL, warning rules decide WARN,
/// otherwise PASS; every fired rule leaves a note or error even when a
/// worse rule decides the status.
pub fn finalize(
    file: String,
    detected_delimiter: String,
    encoding_used: String,
    signals: EvalSignals,
    thresholds: &GateThresholds,
) -> FileResult {
    let EvalSignals {
        rows,
        cols,
        empty_rows,
        drift_rows,
        duplicate_rows_est,
        lossy_decode,
        delimiter_fallback,
        mut notes,
        mut errors,
    } = signals;

    // Fatal rules
    if rows == 0 {
        errors.push("no rows detected".to_string());
    } else if cols.is_none() {
        errors.push("column count could not be established".to_string());
    }

    // Warning rules; all are evaluated so every observation is retained
    let mut warned = false;

    if lossy_decode {
        notes.push(format!(
            "lossy decode fallback (encoding_used={})",
            encoding_used
        ));
        warned = true;
    }

    if rows > 0 {
        let empty_fraction = empty_rows as f64 / rows as f64;
        if empty_fraction > thresholds.empty_row_warn_fraction {
            notes.push(format!(
                "has_empty_rows={} (fraction {:.2} > {:.2})",
                empty_rows, empty_fraction, thresholds.empty_row_warn_fraction
            ));
            warned = true;
        }
    }

    let dup_ratio = duplicate_rows_est.ratio();
    if duplicate_rows_est.scanned > 0 && dup_ratio > thresholds.duplicate_warn_ratio {
        notes.push(format!(
            "duplicate_rows_est={} (scanned={}, ratio {:.2} > {:.2})",
            duplicate_rows_est.dups,
            duplicate_rows_est.scanned,
            dup_ratio,
            thresholds.duplicate_warn_ratio
        ));
        warned = true;
    }

    if drift_rows > 0 {
        notes.push(format!(
            "column_count_drift={} (baseline cols={})",
            drift_rows,
            cols.unwrap_or(0)
        ));
        warned = true;
    }

    if delimiter_fallback {
        notes.push("delimiter_fallback=, (no candidate split any sampled line)".to_string());
        warned = true;
    }

    // Informational only: the estimate did not cover every row
    if duplicate_rows_est.scanned < rows {
        notes.push(format!(
            "duplicate scan truncated at {} of {} rows",
            duplicate_rows_est.scanned, rows
        ));
    }

    let status = if !errors.is_empty() {
        FileStatus::Fail
    } else if warned {
        FileStatus::Warn
    } else {
        FileStatus::Pass
    };

    FileResult {
        file,
        status,
        rows,
        cols: cols.unwrap_or(0),
        detected_delimiter,
        encoding_used,
        empty_rows,
        duplicate_rows_est,
        notes,
        errors,
    }
}
