//! Logging initialization.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

use crate::args::LogLevel;

/// Initialize logging with the specified level.
///
/// Logs go to stderr; stdout only carries progress messages.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let level: Level = level.into();

    fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}
