/// File logging. Stdout belongs to the terminal UI, so nothing is printed.
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, prelude::*};

const LOG_FILE: &str = "randcolor.log";
const DEFAULT_FILTER: &str = "info,randcolor=debug";

/// `<data dir>/randcolor/logs`, or `./logs` when the platform has no data dir.
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("randcolor"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("logs")
}

/// Install the global subscriber. Keep the guard alive until exit or
/// buffered lines are lost.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;
    write_session_separator(&log_dir.join(LOG_FILE))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(guard)
}

fn write_session_separator(path: &Path) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let separator = "=".repeat(80);
    writeln!(
        file,
        "\n{separator}\n=== New Session Started at {timestamp} ===\n{separator}"
    )?;
    Ok(())
}
