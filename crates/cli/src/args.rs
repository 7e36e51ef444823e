use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "prime-gaps")]
#[command(version, about = "Tabulate the gaps between consecutive primes below a bound")]
pub struct Cli {
    /// Exclusive upper limit for the prime search [default: 50000000000]
    #[arg(long, env = "PRIME_GAPS_BOUND")]
    pub bound: Option<u64>,

    /// Path of the CSV file to write (overwritten on every run) [default: prime_gaps.csv]
    #[arg(short, long, env = "PRIME_GAPS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// TOML file supplying `bound` and `output`; flags and environment take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Format of the diagnostic log written to stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Suppress the console status messages
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}
