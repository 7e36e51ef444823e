//! Frequency Counter: occurrences of each distinct gap.

use crate::{DistinctGaps, FrequencyTable, GapSequence};

/// Counts how often each value of `distinct` occurs in `gaps`.
///
/// `counts[k]` in the returned table belongs to `distinct[k]`, so the table
/// inherits the ascending order of `distinct`. When `distinct` was produced
/// from `gaps` the counts sum to `gaps.len()`. Values of `gaps` missing from
/// `distinct` are skipped.
pub fn count_frequencies(gaps: &GapSequence, distinct: &DistinctGaps) -> FrequencyTable {
    let keys = distinct.as_slice();
    let mut counts = vec![0u64; keys.len()];

    for gap in gaps {
        if let Ok(position) = keys.binary_search(gap) {
            counts[position] += 1;
        }
    }

    tracing::debug!(rows = keys.len(), "Frequencies counted");
    FrequencyTable::from_parts(keys.to_vec(), counts)
}
