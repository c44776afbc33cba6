//! Tracing subscriber setup for the server.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `-v` raises the default level to debug (twice for trace), `-q` drops
/// it to errors only. The `TRACKD_LOG` environment variable overrides
/// the flag-derived level entirely.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbose: u8, quiet: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_env("TRACKD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
