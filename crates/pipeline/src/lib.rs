//! Core domain for the prime gap distribution.
//!
//! Four pure stages compose in a strict pipeline, each allocating a fresh
//! result from the previous stage's output:
//!
//! ```text
//! primes_below ──► consecutive_gaps ──┬──► distinct_gaps ──┐
//!                                     └────────────────────┴──► count_frequencies
//! ```
//!
//! [`run`] drives the whole sequence for one [`Bound`].
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is written through [`TableSink`]; the `report` crate
//! defines *how*.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | `Bound`, the stage output sequences, `FrequencyTable`, `GapReport` |
//! | [`sieve`] | Sieve Generator |
//! | [`gaps`] | Gap Computer |
//! | [`dedup`] | Deduplicator |
//! | [`frequency`] | Frequency Counter |
//! | [`sink`] | The `TableSink` output port |
//! | [`errors`] | Top-level error type |

pub mod dedup;
pub mod errors;
pub mod frequency;
pub mod gaps;
pub mod sieve;
pub mod sink;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use dedup::distinct_gaps;
pub use errors::PrimeGapsError;
pub use frequency::count_frequencies;
pub use gaps::consecutive_gaps;
pub use sieve::primes_below;
pub use sink::TableSink;
pub use types::{
    Bound, DistinctGaps, FrequencyTable, GapReport, GapSequence, PrimeSequence, DEFAULT_BOUND,
};

use tracing::info_span;

/// Runs the full pipeline for `bound` and returns the gap frequency table.
///
/// Every stage blocks until complete before the next begins. A degenerate
/// bound (below 2) produces an empty table rather than an error.
///
/// # Errors
///
/// Propagates [`PrimeGapsError::BoundExceedsAddressSpace`] from the sieve.
pub fn run(bound: Bound) -> Result<GapReport, PrimeGapsError> {
    let primes = info_span!("sieve", %bound).in_scope(|| primes_below(bound))?;
    let prime_count = primes.len();
    let gaps = info_span!("gaps").in_scope(|| consecutive_gaps(&primes));
    // Only the count is needed from here on.
    drop(primes);

    let distinct = info_span!("dedup").in_scope(|| distinct_gaps(&gaps));
    let table = info_span!("frequency").in_scope(|| count_frequencies(&gaps, &distinct));

    tracing::info!(
        prime_count,
        distinct_gaps = table.len(),
        max_gap = table.max_gap(),
        "Gap distribution computed"
    );

    Ok(GapReport {
        bound,
        prime_count,
        table,
    })
}
