//! Top-level error type for the prime gap pipeline domain.
//!
//! [`PrimeGapsError`] covers conditions detected before or during the numeric
//! pipeline. Output failures are defined by the sink implementation that
//! produces them (see [`crate::TableSink::Error`]).
//!
//! A degenerate bound (below 2) is **not** an error: every stage yields an
//! empty result and the run completes normally.

use thiserror::Error;

use crate::Bound;

// ---------------------------------------------------------------------------
// Pipeline-level errors
// ---------------------------------------------------------------------------

/// Errors that stop a pipeline run before it produces a frequency table.
///
/// Memory exhaustion while allocating the sieve buffer is deliberately absent:
/// it aborts the process and is never surfaced as a value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrimeGapsError {
    /// The bound cannot be used as a buffer length on this platform.
    ///
    /// Produced by: the sieve, when the bound does not fit in `usize`.
    #[error("Bound {bound} exceeds the addressable memory of this platform")]
    BoundExceedsAddressSpace {
        /// The bound that was requested.
        bound: Bound,
    },

    /// The run configuration is invalid.
    ///
    /// Produced by: the CLI's config validation, at load time. The pipeline
    /// never starts with an invalid config.
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },
}
