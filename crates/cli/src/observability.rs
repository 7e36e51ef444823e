//! Tracing subscriber wiring.
//!
//! All `tracing` spans and events emitted by every crate in the workspace
//! flow through the subscriber installed here. Output goes to stderr so that
//! stdout carries only the console status messages.

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::args::LogFormat;

/// Installs the global subscriber. `RUST_LOG` overrides the default `info`
/// level.
pub fn init(format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))
}
