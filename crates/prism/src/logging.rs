//! Structured logging with tracing
//!
//! Centralized logging setup using the tracing ecosystem. The `PRISM_LOG`
//! environment variable overrides the configured level with a full
//! `EnvFilter` directive string.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

use prism_domain::error::{Error, Result};

pub use crate::config::LoggingConfig;

/// Initialize logging with the provided configuration
///
/// Re-initialization is a no-op, so tests and embedders may call this
/// freely.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::try_from_env("PRISM_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // The types differ per format, so the branches cannot share a builder.
    let initialized = if config.json_format {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    } else {
        fmt().with_env_filter(filter).with_target(true).try_init()
    };

    if initialized.is_ok() {
        tracing::info!(%level, "logging initialized");
    }
    Ok(())
}

/// Parse a log level string to a tracing [`Level`]
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level '{level}': expected trace, debug, info, warn or error"
        ))),
    }
}
