//! Value types flowing through the prime gap pipeline.
//!
//! Each stage allocates a fresh value from its input and nothing is mutated
//! afterwards. The sequence newtypes can only be constructed inside this crate,
//! so the invariants documented on each type hold for every value a caller
//! can observe.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Bound
// ---------------------------------------------------------------------------

/// Default exclusive upper limit for the prime search.
pub const DEFAULT_BOUND: u64 = 50_000_000_000;

/// Exclusive upper limit for the prime search.
///
/// Any value is accepted. Bounds below 2 contain no primes and produce empty
/// results through every stage. Deserialises from a bare integer, so config
/// files can carry it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct Bound(u64);

impl Bound {
    /// Creates a [`Bound`] from a raw integer.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns `true` if no prime lies below this bound.
    pub fn is_degenerate(self) -> bool {
        self.0 < 2
    }
}

impl Default for Bound {
    fn default() -> Self {
        Self(DEFAULT_BOUND)
    }
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Bound {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

// ---------------------------------------------------------------------------
// Macro for stage-produced integer sequences.
// Generates: struct, crate-private from_vec(), read accessors, IntoIterator.
// ---------------------------------------------------------------------------
macro_rules! integer_sequence {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name(Vec<u64>);

        impl $name {
            pub(crate) fn from_vec(values: Vec<u64>) -> Self {
                Self(values)
            }

            /// Returns the values as a slice.
            pub fn as_slice(&self) -> &[u64] {
                &self.0
            }

            /// Returns the number of values.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Returns `true` if the sequence holds no values.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Iterates over the values in order.
            pub fn iter(&self) -> std::slice::Iter<'_, u64> {
                self.0.iter()
            }

            /// Consumes the sequence and returns the underlying vector.
            pub fn into_inner(self) -> Vec<u64> {
                self.0
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a u64;
            type IntoIter = std::slice::Iter<'a, u64>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

integer_sequence! {
    /// All primes strictly below a [`Bound`], strictly increasing.
    ///
    /// Produced by [`crate::primes_below`].
    PrimeSequence
}

integer_sequence! {
    /// Differences between consecutive primes, one entry per prime.
    ///
    /// Element 0 is the sentinel `0`; it is not a real gap because the first
    /// prime has no predecessor. Element `i` is `primes[i] - primes[i - 1]`.
    ///
    /// Produced by [`crate::consecutive_gaps`].
    GapSequence
}

integer_sequence! {
    /// The distinct values of a [`GapSequence`], strictly ascending.
    ///
    /// Produced by [`crate::distinct_gaps`].
    DistinctGaps
}

// ---------------------------------------------------------------------------
// Frequency table
// ---------------------------------------------------------------------------

/// Occurrence count of every distinct gap, in ascending gap order.
///
/// `counts()[k]` is the number of times `gaps()[k]` appears in the gap
/// sequence the table was built from. The sentinel `0` is counted like any
/// other value, so [`FrequencyTable::total`] equals the number of primes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    gaps: Vec<u64>,
    counts: Vec<u64>,
}

impl FrequencyTable {
    pub(crate) fn from_parts(gaps: Vec<u64>, counts: Vec<u64>) -> Self {
        debug_assert_eq!(gaps.len(), counts.len());
        Self { gaps, counts }
    }

    /// Distinct gap values, strictly ascending.
    pub fn gaps(&self) -> &[u64] {
        &self.gaps
    }

    /// Counts aligned positionally with [`FrequencyTable::gaps`].
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Iterates over `(gap, count)` rows in ascending gap order.
    pub fn rows(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.gaps.iter().copied().zip(self.counts.iter().copied())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.gaps.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest gap in the table, if any.
    pub fn max_gap(&self) -> Option<u64> {
        self.gaps.last().copied()
    }
}

// ---------------------------------------------------------------------------
// Run result
// ---------------------------------------------------------------------------

/// Outcome of a single pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapReport {
    /// Bound the run searched below.
    pub bound: Bound,

    /// Number of primes found below the bound.
    pub prime_count: usize,

    /// Gap frequencies, ascending by gap.
    pub table: FrequencyTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_degenerate_below_two() {
        assert!(Bound::new(0).is_degenerate());
        assert!(Bound::new(1).is_degenerate());
        assert!(!Bound::new(2).is_degenerate());
    }

    #[test]
    fn test_bound_default_and_display() {
        assert_eq!(Bound::default().as_u64(), DEFAULT_BOUND);
        assert_eq!(Bound::new(50_000_000_000).to_string(), "50000000000");
    }

    #[test]
    fn test_frequency_table_rows_and_total() {
        let table = FrequencyTable::from_parts(vec![0, 1, 2, 4], vec![1, 1, 4, 2]);

        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows, vec![(0, 1), (1, 1), (2, 4), (4, 2)]);
        assert_eq!(table.total(), 8);
        assert_eq!(table.max_gap(), Some(4));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_empty_frequency_table() {
        let table = FrequencyTable::default();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.max_gap(), None);
    }
}
