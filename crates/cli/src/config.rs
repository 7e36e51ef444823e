//! Run configuration.
//!
//! Values are resolved from, lowest to highest precedence:
//!
//! 1. Built-in defaults (`bound = 50000000000`, `output = "prime_gaps.csv"`)
//! 2. The TOML file named by `--config`, if any
//! 3. `PRIME_GAPS_BOUND` / `PRIME_GAPS_OUTPUT`
//! 4. `--bound` / `--output`
//!
//! Clap merges 3 and 4 into one value, so only the file layer is applied here.
//!
//! # Example Config File
//!
//! ```toml
//! # prime-gaps.toml
//!
//! # Exclusive upper limit for the prime search
//! bound = 1000000000
//!
//! # Output table, truncated on every run
//! output = "gaps-1e9.csv"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pipeline::{Bound, PrimeGapsError};
use serde::Deserialize;

use crate::args::Cli;

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "prime_gaps.csv";

/// Settings as they appear in the TOML file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Exclusive upper limit for the prime search.
    pub bound: Option<Bound>,

    /// Path of the output table.
    pub output: Option<PathBuf>,
}

impl FileConfig {
    /// Reads and parses a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub bound: Bound,
    pub output: PathBuf,
}

impl RunConfig {
    /// Layers the command line (and environment) over the optional config file.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let config = Self::merge(cli.bound, cli.output.clone(), file);
        config.validate()?;
        Ok(config)
    }

    fn merge(bound: Option<u64>, output: Option<PathBuf>, file: FileConfig) -> Self {
        Self {
            bound: bound.map(Bound::new).or(file.bound).unwrap_or_default(),
            output: output
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        }
    }

    fn validate(&self) -> Result<(), PrimeGapsError> {
        if self.output.as_os_str().is_empty() {
            return Err(PrimeGapsError::ConfigurationError {
                message: "output path must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
