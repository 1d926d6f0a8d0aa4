//! Logging init: append to a log file in the XDG state dir, or stderr.
//!
//! `FASTSTART_LOG` takes precedence over `RUST_LOG` so the tool's verbosity can
//! be changed without affecting other programs in the same environment.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives for faststart only.
pub const LOG_ENV: &str = "FASTSTART_LOG";

const DEFAULT_FILTER: &str = "info,faststart_core=debug,faststart=debug";

/// Picks the filter directives: `FASTSTART_LOG`, then `RUST_LOG`, then the
/// default. Blank values are ignored.
fn filter_directives(faststart_log: Option<String>, rust_log: Option<String>) -> String {
    [faststart_log, rust_log]
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

fn env_filter() -> EnvFilter {
    let directives = filter_directives(
        std::env::var(LOG_ENV).ok(),
        std::env::var("RUST_LOG").ok(),
    );
    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `$XDG_STATE_HOME/faststart/faststart.log`, creating the directory.
pub fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("faststart")?;
    dirs.place_state_file("faststart.log")
        .context("create faststart state directory")
}

/// Initialize structured logging to the state log file and return its path.
/// On failure (e.g. state dir unwritable) the caller falls back to
/// [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(log = %path.display(), "faststart logging initialized");
    Ok(path)
}

/// Initialize logging to stderr only.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
