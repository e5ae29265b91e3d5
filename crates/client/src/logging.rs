//! Tracing subscriber setup for the terminal client.

use anyhow::{Result, anyhow};

/// Logs go to stderr so stdout carries only the board and command replies.
/// `RUST_LOG` overrides the default `info` level.
pub fn setup_logging() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
