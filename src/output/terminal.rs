use crate::core::{FileResult, RunResult};
use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Plain (uncolored) rendering, used when writing to a file and as the
/// single source of line layout for the colored path.
pub fn render_terminal_report(run: &RunResult) -> String {
    let mut out = String::new();

    for file in &run.files {
        out.push_str(&file_line(file));
        out.push('\n');
        for note in &file.notes {
            out.push_str(&format!("    note: {}\n", note));
        }
        for error in &file.errors {
            out.push_str(&format!("    error: {}\n", error));
        }
    }

    if run.files.is_empty() {
        out.push_str("No CSV files discovered.\n");
    }

    out.push_str(&format!(
        "\nOverall: {}  (PASS={}, WARN={}, FAIL={})\n",
        run.overall_status, run.pass_count, run.warn_count, run.fail_count
    ));

    out
}

fn file_line(file: &FileResult) -> String {
    format!(
        "{} {} (rows={}, cols={}, delimiter={:?}, encoding={})",
        file.status, file.file, file.rows, file.cols, file.detected_delimiter, file.encoding_used
    )
}

fn colorize_status(line: &str) -> String {
    if let Some(rest) = line.strip_prefix("PASS") {
        format!("{}{}", "PASS".green(), rest)
    } else if let Some(rest) = line.strip_prefix("WARN") {
        format!("{}{}", "WARN".yellow(), rest)
    } else if let Some(rest) = line.strip_prefix("FAIL") {
        format!("{}{}", "FAIL".red(), rest)
    } else if let Some(rest) = line.strip_prefix("Overall: ") {
        let colored = match rest.split_whitespace().next() {
            Some("PASS") => rest.replacen("PASS", &"PASS".green().to_string(), 1),
            Some("WARN") => rest.replacen("WARN", &"WARN".yellow().to_string(), 1),
            _ => rest.replacen("FAIL", &"FAIL".red().to_string(), 1),
        };
        format!("Overall: {}", colored)
    } else {
        line.to_string()
    }
}

pub fn output_terminal(run: &RunResult, output_file: Option<PathBuf>) -> Result<()> {
    let report = render_terminal_report(run);
    if let Some(path) = output_file {
        if let Some(parent) = path.parent() {
            crate::io::ensure_dir(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(report.as_bytes())?;
    } else {
        for line in report.lines() {
            println!("{}", colorize_status(line));
        }
    }
    Ok(())
}
