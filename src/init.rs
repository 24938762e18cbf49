//! Process-wide logging setup shared by MCP and CLI modes.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Default `RUST_LOG` directive for the stderr layer.
pub const DEFAULT_DIRECTIVE: &str = "mal_mcp=info";

/// Build the subscriber: stderr (filtered by `RUST_LOG`) plus an append-only
/// DEBUG log file.
///
/// Stdout is reserved for the MCP transport, so nothing here writes to it.
pub fn subscriber(
    log_file: &Path,
    default_directive: &str,
) -> Result<impl Subscriber + Send + Sync + 'static> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let env_filter = EnvFilter::from_default_env().add_directive(default_directive.parse()?);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_filter(LevelFilter::DEBUG);

    Ok(tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer))
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init_tracing(log_file: &Path) -> Result<()> {
    let subscriber = subscriber(log_file, DEFAULT_DIRECTIVE)?;
    tracing::subscriber::set_global_default(subscriber)
        .context("A global tracing subscriber is already installed")?;
    tracing::debug!("Logging to {}", log_file.display());
    Ok(())
}
