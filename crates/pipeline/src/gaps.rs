//! Gap Computer: differences between consecutive primes.

use crate::{GapSequence, PrimeSequence};

/// Returns one gap per prime: a leading `0` sentinel, then each prime minus
/// its predecessor.
///
/// An empty prime sequence yields an empty gap sequence.
pub fn consecutive_gaps(primes: &PrimeSequence) -> GapSequence {
    let values = primes.as_slice();
    if values.is_empty() {
        return GapSequence::default();
    }

    let mut gaps = Vec::with_capacity(values.len());
    gaps.push(0);
    gaps.extend(values.windows(2).map(|pair| pair[1] - pair[0]));

    tracing::debug!(gap_count = gaps.len(), "Gaps computed");
    GapSequence::from_vec(gaps)
}
