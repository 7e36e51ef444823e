//! Deduplicator: the ascending set of distinct gap values.

use std::collections::BTreeSet;

use crate::{DistinctGaps, GapSequence};

/// Returns each value of `gaps` exactly once, strictly ascending.
///
/// Output order depends only on the values, never on where they first
/// appear in the input. Memory grows with the number of distinct values,
/// not with the length of `gaps`.
pub fn distinct_gaps(gaps: &GapSequence) -> DistinctGaps {
    let unique: BTreeSet<u64> = gaps.iter().copied().collect();
    let values: Vec<u64> = unique.into_iter().collect();

    tracing::debug!(distinct_count = values.len(), "Gaps deduplicated");
    DistinctGaps::from_vec(values)
}
