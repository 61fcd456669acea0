//! Logging setup anchored at the application root.

use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::{AnchorDir, Result, resolve_root};

/// Initialize a tracing subscriber with default configuration.
///
/// This sets up a subscriber that prints formatted logs to stdout.
/// It uses the `RUST_LOG` environment variable to determine the log level,
/// defaulting to "info" if not set.
pub fn init() -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Directory where log files belong, anchored at the application root.
///
/// Computes the path only; creating the directory is the caller's job.
pub fn default_log_dir() -> Result<PathBuf> {
    Ok(resolve_root()?.join(AnchorDir::Logs))
}
