//! Prime gap frequency table writer.
//!
//! Implements [`pipeline::TableSink`] as comma-separated text:
//!
//! ```text
//! Gaps,Frequencies
//! 0,1
//! 1,1
//! 2,4
//! 4,2
//! ```
//!
//! Every field is plain decimal and every row, the header included, ends in
//! `\n`. An empty table renders as the header alone.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** File creation, buffering, and byte formatting live
//! here. The [`pipeline`] crate sees only [`pipeline::TableSink`].

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use pipeline::{FrequencyTable, TableSink};
use thiserror::Error;

/// Header row written before the table body.
pub const HEADER: [&str; 2] = ["Gaps", "Frequencies"];

const DELIMITER: char = ',';

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures while producing the output table. None of them are retried.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output file could not be created or truncated.
    #[error("Failed to create output file '{}'", path.display())]
    Create {
        /// Path that was being opened.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing the table failed part way through.
    #[error("Failed to write frequency table")]
    Write {
        #[from]
        source: io::Error,
    },
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Writes a [`FrequencyTable`] as comma-separated rows to any [`Write`].
#[derive(Debug)]
pub struct CsvTableWriter<W: Write> {
    inner: W,
}

impl<W: Write> CsvTableWriter<W> {
    /// Wraps an existing writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn write_row(
        &mut self,
        first: impl std::fmt::Display,
        second: impl std::fmt::Display,
    ) -> io::Result<()> {
        writeln!(self.inner, "{first}{DELIMITER}{second}")
    }
}

impl CsvTableWriter<BufWriter<File>> {
    /// Creates `path`, truncating any existing file, and wraps it in a
    /// buffered writer.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| ReportError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TableSink for CsvTableWriter<W> {
    type Error = ReportError;

    fn write_table(&mut self, table: &FrequencyTable) -> Result<(), ReportError> {
        self.write_row(HEADER[0], HEADER[1])?;
        for (gap, count) in table.rows() {
            self.write_row(gap, count)?;
        }
        self.inner.flush()?;

        tracing::debug!(rows = table.len(), "Frequency table written");
        Ok(())
    }
}

/// Writes `table` to a freshly created or truncated file at `path`.
pub fn write_csv_file(path: impl AsRef<Path>, table: &FrequencyTable) -> Result<(), ReportError> {
    let path = path.as_ref();
    CsvTableWriter::create(path)?.write_table(table)?;
    tracing::info!(path = %path.display(), rows = table.len(), "Output file written");
    Ok(())
}
