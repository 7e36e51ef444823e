//! Sieve Generator: every prime strictly below a bound.
//!
//! Classic Sieve of Eratosthenes over a bit-packed flag buffer. The buffer is
//! owned by [`primes_below`] for the duration of the call and dropped before
//! it returns; no other stage ever sees it.
//!
//! Memory is one bit per candidate, so the default bound of 5×10^10 needs
//! roughly 6.25 GB of flags in addition to the prime sequence itself. There
//! is no segmented fallback; allocation failure aborts the process.

use crate::{Bound, PrimeGapsError, PrimeSequence};

const WORD_BITS: usize = u64::BITS as usize;

/// Returns all primes strictly less than `bound`, ascending.
///
/// Bounds below 2 yield an empty sequence.
///
/// # Errors
///
/// [`PrimeGapsError::BoundExceedsAddressSpace`] if `bound` does not fit in
/// `usize` and so cannot size the flag buffer.
pub fn primes_below(bound: Bound) -> Result<PrimeSequence, PrimeGapsError> {
    if bound.is_degenerate() {
        return Ok(PrimeSequence::default());
    }

    let limit = usize::try_from(bound.as_u64())
        .map_err(|_| PrimeGapsError::BoundExceedsAddressSpace { bound })?;

    let mut flags = PrimeFlags::all_set(limit);
    flags.clear(0);
    flags.clear(1);

    let mut i = 2usize;
    while i.checked_mul(i).is_some_and(|square| square < limit) {
        if flags.get(i) {
            for multiple in (i * i..limit).step_by(i) {
                flags.clear(multiple);
            }
        }
        i += 1;
    }

    let primes: Vec<u64> = flags.iter_set().map(|p| p as u64).collect();
    tracing::debug!(prime_count = primes.len(), "Sieve complete");

    Ok(PrimeSequence::from_vec(primes))
}

// ---------------------------------------------------------------------------
// Bit-packed flag buffer
// ---------------------------------------------------------------------------

/// One flag per index in `0..len`, packed 64 to a word.
///
/// Bits past `len` in the last word are never read.
struct PrimeFlags {
    words: Vec<u64>,
    len: usize,
}

impl PrimeFlags {
    fn all_set(len: usize) -> Self {
        Self {
            words: vec![u64::MAX; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    fn get(&self, index: usize) -> bool {
        self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }

    fn clear(&mut self, index: usize) {
        self.words[index / WORD_BITS] &= !(1u64 << (index % WORD_BITS));
    }

    /// Indices whose flag is still set, ascending.
    fn iter_set(&self) -> impl Iterator<Item = usize> + '_ {
        let len = self.len;
        self.words
            .iter()
            .enumerate()
            .flat_map(|(word_index, &word)| SetBits {
                word,
                base: word_index * WORD_BITS,
            })
            .take_while(move |&index| index < len)
    }
}

/// Positions of the set bits of one word, lowest first.
struct SetBits {
    word: u64,
    base: usize,
}

impl Iterator for SetBits {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.word == 0 {
            return None;
        }
        let offset = self.word.trailing_zeros() as usize;
        // Clear the lowest set bit.
        self.word &= self.word - 1;
        Some(self.base + offset)
    }
}
