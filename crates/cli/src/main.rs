//! Prime gap CLI entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Parse configuration** — flags, environment, and the optional TOML file
//!    are resolved into a [`config::RunConfig`] and validated.
//! 2. **Wire observability** — install the `tracing-subscriber` layer that
//!    every crate's spans and events flow through.
//! 3. **Run the pipeline** — call [`pipeline::run`] with the configured bound.
//! 4. **Write the table** — hand the result to [`report`], which truncates and
//!    rewrites the output file.
//!
//! Elapsed time covers steps 3 and 4 and is measured on the wall clock.

mod args;
mod config;
mod observability;

use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info_span;
use uuid::Uuid;

use args::Cli;
use config::RunConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.log_format)?;

    let config = RunConfig::resolve(&cli)?;

    let run_id = Uuid::new_v4();
    let span = info_span!("run", %run_id, bound = %config.bound);
    let _guard = span.enter();

    if !cli.quiet {
        println!();
        println!("THINKING... hunting for data for under {}", config.bound);
    }

    let started_at = Utc::now();
    let start = Instant::now();

    let report = pipeline::run(config.bound).context("Prime gap pipeline failed")?;
    report::write_csv_file(&config.output, &report.table)
        .with_context(|| format!("Failed to write '{}'", config.output.display()))?;

    let elapsed = start.elapsed();
    tracing::info!(
        started_at = %started_at.to_rfc3339(),
        elapsed_ms = elapsed.as_millis() as u64,
        output = %config.output.display(),
        prime_count = report.prime_count,
        "Run complete"
    );

    if !cli.quiet {
        println!(
            "Found data for values up to {} in {:.3} seconds",
            config.bound,
            elapsed.as_secs_f64()
        );
        println!();
    }

    Ok(())
}
