//! One-shot source listing over the host boundary.

use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use driftdeck_runtime::Config;
use driftdeck_types::{new_request_id, InboundMessage, OutboundMessage, SourceInfo};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use super::review::build_bridge;
use crate::args::OutputFormat;

const RESPONSE_TIMEOUT: Duration = Duration::from_secs(10);

pub fn handle(
    config: &Config,
    host_command: Option<String>,
    demo: bool,
    format: OutputFormat,
) -> Result<()> {
    let bridge = build_bridge(config, host_command, demo)?;

    let request_id = new_request_id();
    bridge.send(OutboundMessage::ListSources {
        request_id: request_id.clone(),
    });

    let deadline = Instant::now() + RESPONSE_TIMEOUT;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            bail!("timed out waiting for the host source list");
        }
        match bridge.recv_timeout(remaining) {
            Some(InboundMessage::SourcesLoaded { sources, .. }) => {
                print_sources(&sources, format);
                return Ok(());
            }
            Some(InboundMessage::HostError { message, .. }) => bail!(message),
            Some(_) => continue,
            None => bail!("timed out waiting for the host source list"),
        }
    }
}

fn print_sources(sources: &[SourceInfo], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            match serde_json::to_string_pretty(sources) {
                Ok(json) => println!("{}", json),
                Err(err) => eprintln!("Error: failed to encode source list: {}", err),
            }
        }
        OutputFormat::Plain => {
            if sources.is_empty() {
                println!("No sources available.");
                return;
            }
            let width = sources.iter().map(|s| s.id.len()).max().unwrap_or(0);
            let colored = std::io::stdout().is_terminal();
            for source in sources {
                // Pad before styling so escape codes don't count against
                // the column width.
                let id = format!("{:<width$}", source.id);
                if colored {
                    println!("{}  {}", id.bold(), source.label);
                } else {
                    println!("{}  {}", id, source.label);
                }
            }
        }
    }
}
