//! Tracing subscriber setup

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

use at_shared::config::{LogFormat, LoggingConfig};

/// Install the global subscriber described by `config`
///
/// `RUST_LOG`, when set, takes precedence over `config.level`.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))
}
