use anyhow::{Context, Result};
use driftdeck_runtime::{resolve_data_dir, Config};

use super::args::{Cli, Commands, SnapshotCommand};
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())
        .context("failed to resolve the data directory")?;
    let config = Config::load_from(&data_dir)
        .with_context(|| format!("failed to load config from {}", data_dir.display()))?;

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Review {
            source,
            host_command,
            demo,
        } => handlers::review::handle(&data_dir, &config, source, host_command, demo),

        Commands::Sources { host_command, demo } => {
            handlers::sources::handle(&config, host_command, demo, cli.format)
        }

        Commands::Snapshot { command } => match command {
            SnapshotCommand::Show => handlers::snapshot::show(&data_dir, cli.format),
            SnapshotCommand::Clear => handlers::snapshot::clear(&data_dir),
        },
    }
}

fn show_guidance() {
    println!("driftdeck - review detected component drift and commit a selection");
    println!();
    println!("Get started:");
    println!("  driftdeck review --demo     open the grid with sample data");
    println!("  driftdeck review            open the grid against the configured host");
    println!("  driftdeck sources           list sources the host can fetch from");
    println!();
    println!("Run 'driftdeck --help' for the full command list.");
}
