use crate::core::Delimiter;

/// One parsed row: the raw line plus its delimiter-split fields.
/// Splitting is the only transformation applied; fields are byte
/// slices of the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedRow<'a> {
    pub raw: &'a str,
    pub fields: Vec<&'a str>,
}

impl<'a> ScannedRow<'a> {
    /// A row is empty when every field is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(|field| field.trim().is_empty())
    }

    pub fn cols(&self) -> usize {
        self.fields.len()
    }
}

/// Lazy row stream over decoded text. Zero-length lines are not rows;
/// everything else is. Stateless across calls: re-invoking with the
/// same text restarts the scan.
pub fn scan_rows<'a>(text: &'a str, delimiter: Delimiter) -> impl Iterator<Item = ScannedRow<'a>> {
    let sep = delimiter.as_char();
    text.lines()
        .filter(|line| !line.is_empty())
        .map(move |line| ScannedRow {
            raw: line,
            fields: line.split(sep).collect(),
        })
}

/// Structural counters for one artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuralSummary {
    pub rows: usize,
    /// Column count fixed by the first non-empty row; `None` when no
    /// row establishes one.
    pub cols: Option<usize>,
    pub empty_rows: usize,
    /// Rows whose column count differs from the established baseline.
    pub drift_rows: usize,
}

/// Single pass over the row stream. Ragged rows are counted as drift,
/// never a failure; the scan always runs to completion.
pub fn summarize_structure(text: &str, delimiter: Delimiter) -> StructuralSummary {
    let mut summary = StructuralSummary::default();

    for row in scan_rows(text, delimiter) {
        summary.rows += 1;

        if row.is_empty() {
            summary.empty_rows += 1;
            continue;
        }

        match summary.cols {
            None => summary.cols = Some(row.cols()),
            Some(cols) if row.cols() != cols => summary.drift_rows += 1,
            Some(_) => {}
        }
    }

    summary
}
