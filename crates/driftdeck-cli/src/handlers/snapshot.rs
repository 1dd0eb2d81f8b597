//! Inspect or discard the saved session snapshot.

use std::path::Path;

use anyhow::Result;
use driftdeck_runtime::SnapshotStore;

use crate::args::OutputFormat;

pub fn show(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let store = SnapshotStore::new(data_dir);

    let Some(snapshot) = store.load()? else {
        println!("No session snapshot at {}", store.path().display());
        return Ok(());
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Plain => {
            println!("Snapshot: {}", store.path().display());
            println!("  records:  {}", snapshot.records.len());
            println!("  selected: {}", snapshot.selected_ids.len());
            println!("  tab:      {:?}", snapshot.tab);
            println!(
                "  page:     {} ({} per page)",
                snapshot.current_page, snapshot.page_size
            );
        }
    }
    Ok(())
}

pub fn clear(data_dir: &Path) -> Result<()> {
    let store = SnapshotStore::new(data_dir);
    store.clear()?;
    println!("Session snapshot cleared.");
    Ok(())
}
