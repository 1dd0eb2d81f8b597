//! Review command: wire the bridge, restore the snapshot, run the TUI.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use driftdeck_engine::GridState;
use driftdeck_runtime::{
    spawn_connector, spawn_process_host, BridgeHandle, Config, SnapshotStore, SnapshotWriter,
};

use crate::app::ReviewApp;
use crate::demo::DemoConnector;
use crate::logging;
use crate::tui;

/// Trailing quiescence window before a session snapshot is written
const SNAPSHOT_DEBOUNCE: Duration = Duration::from_millis(300);

pub fn handle(
    data_dir: &Path,
    config: &Config,
    source: Option<String>,
    host_command: Option<String>,
    demo: bool,
) -> Result<()> {
    // Startup is fail-fast: an unusable data dir or log file is a
    // configuration error, not something to degrade around.
    let _log_guard = logging::init(data_dir)?;

    let source = source
        .or_else(|| config.default_source.clone())
        .unwrap_or_else(|| if demo { "demo".to_string() } else { "default".to_string() });

    let bridge = build_bridge(config, host_command, demo)?;

    let store = SnapshotStore::new(data_dir);
    let grid = match store.load()? {
        Some(snapshot) => GridState::from_snapshot(snapshot),
        None => {
            let mut grid = GridState::new();
            grid.set_page_size(config.default_page_size);
            grid
        }
    };
    let writer = SnapshotWriter::spawn(store, SNAPSHOT_DEBOUNCE);

    let mut app = ReviewApp::new(bridge, grid, source, Some(writer));
    app.request_fetch();

    tui::run_review(app)
}

pub(crate) fn build_bridge(
    config: &Config,
    host_command: Option<String>,
    demo: bool,
) -> Result<BridgeHandle> {
    if demo {
        return Ok(spawn_connector(DemoConnector::new()));
    }

    let command = host_command
        .or_else(|| config.host_command.clone())
        .context(
            "no host connector configured; pass --host-command, set host_command in config.toml, or use --demo",
        )?;
    spawn_process_host(&command)
        .with_context(|| format!("failed to start host connector '{}'", command))
}
