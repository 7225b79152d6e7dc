use std::collections::HashSet;

use xxhash_rust::xxh64::xxh64;

use crate::core::DuplicateEstimate;

/// Count exact duplicates among at most `cap` raw row strings.
/// Equality is byte-level on the raw line, not on parsed fields.
/// Callers compare `scanned` against the total row count to tell an
/// estimate apart from an exhaustive count.
pub fn estimate_duplicates<'a, I>(rows: I, cap: usize) -> DuplicateEstimate
where
    I: Iterator<Item = &'a str>,
{
    let mut seen: HashSet<u64> = HashSet::new();
    let mut estimate = DuplicateEstimate::default();

    for raw in rows.take(cap) {
        estimate.scanned += 1;
        if !seen.insert(xxh64(raw.as_bytes(), 0)) {
            estimate.dups += 1;
        }
    }

    estimate
}
