//! File-backed tracing setup.
//!
//! The TUI owns the terminal, so log lines go to `logs/driftdeck.log` in
//! the data directory through a non-blocking appender. `DRIFTDECK_LOG`
//! controls the filter (standard env-filter syntax).

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub fn init(data_dir: &Path) -> Result<WorkerGuard> {
    let log_dir = data_dir.join("logs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::never(&log_dir, "driftdeck.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("DRIFTDECK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("driftdeck=info,driftdeck_runtime=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
