use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Log to stderr so stdout carries only the report. `RUST_LOG` overrides the level.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("initializing logging: {e}"))
}
