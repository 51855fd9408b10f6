//! CLI argument definitions for the quotebot binary.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--config` | `config.json` | Path to the JSON configuration file |
//! | `--prefix` | from config | Override the command prefix |
//! | `--timeout-ms` | `10000` | Provider request timeout in ms |
//! | `--log-level` | `info` | Log level (error, warn, info, debug, trace) |

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Stock summary chat bot backed by Alpha Vantage.
///
/// Reads chat messages line-by-line from stdin and answers prefixed stock
/// requests with a formatted OHLCV summary.
#[derive(Debug, Parser)]
#[command(name = "quotebot", author, version, about = "Stock summary chat bot")]
pub struct Cli {
    /// Path to the JSON configuration file.
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    /// Override the command prefix from the configuration file.
    #[arg(long)]
    pub prefix: Option<String>,

    /// Request timeout budget in milliseconds for provider calls.
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Log level.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

/// Log verbosity options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const fn to_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}
