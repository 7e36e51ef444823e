//! Output port for finished frequency tables.
//!
//! The domain crate performs no I/O. Infrastructure crates implement
//! [`TableSink`] and the composition root hands the table to one of them.

use crate::FrequencyTable;

/// Destination for a rendered [`FrequencyTable`].
///
/// Implementations must write rows in the order yielded by
/// [`FrequencyTable::rows`] and keep the `(gap, count)` field order stable.
pub trait TableSink {
    /// Failure reported by this sink. Always fatal to the run; there is no
    /// retry or partial-write recovery.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Writes the whole table, including any header the format requires.
    fn write_table(&mut self, table: &FrequencyTable) -> Result<(), Self::Error>;
}
