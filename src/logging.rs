//! Tracing setup.
//!
//! While the clock runs, the terminal is in raw mode on the alternate
//! screen, so log lines cannot go to stdout or stderr. Logging is therefore
//! opt-in: with a log path, events are appended to that file; without one,
//! no subscriber is installed and events are dropped. A log file that
//! cannot be opened is reported on stderr and treated like no log path.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Filter comes from `RUST_LOG`, default `info`.
pub fn init(log_path: Option<&Path>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };

    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "[klingon-clock] failed to open log file {:?}: {}; logging disabled",
                path, e
            );
            return Ok(());
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .try_init()
        .context("tracing subscriber already installed")?;
    Ok(())
}
