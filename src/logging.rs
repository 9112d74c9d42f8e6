//! Logging system setup.
//!
//! Installs a tracing-subscriber registry with either human-readable or JSON
//! output. Logs go to stderr so they never interleave with command output or
//! the terminal UI drawn on stdout.

use crate::config::LoggingSettings;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the logging system.
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
/// `json_format` forces JSON output regardless of the configuration.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn setup_logging(
    config: &LoggingSettings,
    json_format: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let log_level = config.level.as_str();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if json_format || config.json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(true),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false),
            )
            .try_init()?;
    }

    debug!("Logging initialized with level: {}", log_level);
    Ok(())
}
