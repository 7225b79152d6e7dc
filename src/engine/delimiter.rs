use std::collections::HashMap;

use crate::core::Delimiter;

/// Candidate separators in tie-break priority order: comma wins over
/// semicolon, semicolon over tab.
pub const DELIMITER_CANDIDATES: [Delimiter; 3] =
    [Delimiter::Comma, Delimiter::Semicolon, Delimiter::Tab];

/// Outcome of delimiter inference. `fallback` is set when no candidate
/// produced more than one column on any sampled line and the default
/// (comma) was assumed; the file is then treated as single-column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub delimiter: Delimiter,
    pub fallback: bool,
}

/// Infer the field separator from a bounded prefix of non-empty lines.
/// Each candidate is scored by how many sampled lines agree on its most
/// common column count, ignoring column counts of 1; the best score
/// wins, ties resolving by `DELIMITER_CANDIDATES` order.
pub fn detect_delimiter(text: &str, sample_lines: usize) -> Detection {
    let sample: Vec<&str> = text
        .lines()
        .filter(|line| !line.is_empty())
        .take(sample_lines.max(1))
        .collect();

    match best_candidate(&sample, &DELIMITER_CANDIDATES) {
        Some(delimiter) => Detection {
            delimiter,
            fallback: false,
        },
        None => Detection {
            delimiter: Delimiter::Comma,
            fallback: true,
        },
    }
}

/// Pure scoring core, parameterized over the candidate list so the
/// priority order stays in one place. Returns `None` when no candidate
/// splits any sampled line into more than one field.
fn best_candidate(sample: &[&str], candidates: &[Delimiter]) -> Option<Delimiter> {
    let mut best: Option<(usize, Delimiter)> = None;

    for &candidate in candidates {
        let score = consistency_score(sample, candidate);
        // Strictly-greater keeps the earlier candidate on ties.
        if score > 0 && best.map_or(true, |(s, _)| score > s) {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, delimiter)| delimiter)
}

/// Number of sampled lines agreeing on the candidate's most common
/// non-trivial (> 1) column count.
fn consistency_score(sample: &[&str], delimiter: Delimiter) -> usize {
    let mut frequency: HashMap<usize, usize> = HashMap::new();
    for line in sample {
        let cols = line.split(delimiter.as_char()).count();
        if cols > 1 {
            *frequency.entry(cols).or_insert(0) += 1;
        }
    }
    frequency.values().copied().max().unwrap_or(0)
}
