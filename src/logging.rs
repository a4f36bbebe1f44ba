//! Logger setup.
//!
//! The game owns the terminal, so log records never go to stderr. With a log path
//! they are appended to that file; the level comes from `RUST_LOG` (default
//! `info`). Without a path no logger is installed and the `log` macros are no-ops.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};

/// Install the file logger. Returns whether a logger was installed.
pub fn init(log_path: Option<&str>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(Path::new(path))
        .with_context(|| format!("failed to open log file {path}"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("failed to install logger")?;
    Ok(true)
}
