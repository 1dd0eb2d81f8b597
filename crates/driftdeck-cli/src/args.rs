use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Parser)]
#[command(name = "driftdeck")]
#[command(about = "Review detected component drift and commit a selection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (snapshot, config, logs). Defaults to the OS data dir.
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the review grid
    Review {
        /// Source to fetch records from (overrides the configured default)
        #[arg(long)]
        source: Option<String>,

        /// Host connector command (overrides the configured host_command)
        #[arg(long)]
        host_command: Option<String>,

        /// Run against the built-in demo connector instead of a host
        #[arg(long)]
        demo: bool,
    },

    /// List the sources the host can fetch from
    Sources {
        /// Host connector command (overrides the configured host_command)
        #[arg(long)]
        host_command: Option<String>,

        /// Use the built-in demo connector
        #[arg(long)]
        demo: bool,
    },

    /// Inspect or discard the saved session snapshot
    Snapshot {
        #[command(subcommand)]
        command: SnapshotCommand,
    },
}

#[derive(Subcommand)]
pub enum SnapshotCommand {
    /// Print where the snapshot lives and what it holds
    Show,
    /// Delete the saved snapshot
    Clear,
}
