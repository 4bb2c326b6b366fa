//! Logging setup for the command line tool.
//!
//! Library code only emits `tracing` events; installing a subscriber is
//! left to the binary or the embedding application.
//!
//! # Environment Variables
//!
//! - `MARKGATE_LOG` - primary filter (takes precedence)
//! - `RUST_LOG` - fallback filter
//!
//! Without either, only warnings and errors are shown.

use std::io;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub const LOG_ENV: &str = "MARKGATE_LOG";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Plain,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(LogFormat::Plain),
            "json" => Ok(LogFormat::Json),
            other => Err(LoggingError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("unknown log format: {0}")]
    UnknownFormat(String),
    #[error("failed to parse log filter: {0}")]
    FilterParse(#[from] tracing_subscriber::filter::ParseError),
    #[error("failed to initialize subscriber: {0}")]
    TryInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the event filter from `MARKGATE_LOG`, then `RUST_LOG`, then
/// `default_level`.
pub fn build_env_filter(default_level: Level) -> Result<EnvFilter, LoggingError> {
    let from_env = std::env::var(LOG_ENV)
        .ok()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .filter(|f| !f.trim().is_empty());

    let filter = match from_env {
        Some(filter) => filter,
        None => default_level.as_str().to_lowercase(),
    };
    Ok(EnvFilter::try_new(filter)?)
}

/// Installs a global subscriber writing to stderr.
///
/// Stdout carries the converted document, so log lines never go there.
pub fn init_logging(format: LogFormat) -> Result<(), LoggingError> {
    let filter = build_env_filter(Level::WARN)?;

    match format {
        LogFormat::Json => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_writer(io::stderr)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
        LogFormat::Plain => {
            let layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_file(false)
                .with_line_number(false)
                .with_writer(io::stderr)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
    }

    Ok(())
}
