//! Logging setup.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Build the active filter.
///
/// `-v` flags win over `RUST_LOG`, which wins over `logging.level`.
fn build_filter(config: &LoggingConfig, verbose: u8) -> anyhow::Result<EnvFilter> {
    let directive = match verbose {
        0 => {
            if let Ok(filter) = EnvFilter::try_from_default_env() {
                return Ok(filter);
            }
            config.level.as_str()
        }
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    EnvFilter::try_new(directive).with_context(|| format!("invalid log filter '{directive}'"))
}

/// Install the global subscriber. Logs go to stderr so results stay on stdout.
///
/// # Errors
/// Fails if the filter is invalid or a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig, verbose: u8) -> anyhow::Result<()> {
    let filter = build_filter(config, verbose)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
