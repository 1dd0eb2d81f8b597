//! Child-process host connector speaking newline-delimited JSON.
//!
//! The configured host command is spawned once; each outbound request is
//! written to its stdin as one JSON line, and every line it prints on
//! stdout is parsed as an inbound message. The host's stderr passes
//! through untouched to the log file destination.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::channel;
use std::thread;

use driftdeck_types::{InboundMessage, OutboundMessage};
use tracing::{debug, warn};

use crate::bridge::BridgeHandle;
use crate::persist::{Error, Result};

/// Spawn the host command and wire its stdio into a [`BridgeHandle`].
///
/// `command` is split on whitespace: the first token is the program, the
/// rest are arguments.
pub fn spawn_process_host(command: &str) -> Result<BridgeHandle> {
    let mut parts = command.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| Error::Config("host command is empty".to_string()))?;

    let mut child = Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;

    let stdin = child
        .stdin
        .take()
        .ok_or_else(|| Error::Config("host process has no stdin".to_string()))?;
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| Error::Config("host process has no stdout".to_string()))?;

    let (out_tx, out_rx) = channel::<OutboundMessage>();
    let (in_tx, in_rx) = channel::<InboundMessage>();

    // Writer: one JSON line per request.
    thread::spawn(move || {
        let mut stdin = stdin;
        while let Ok(request) = out_rx.recv() {
            let line = match request.to_json_line() {
                Ok(line) => line,
                Err(err) => {
                    warn!(error = %err, "failed to encode host request");
                    continue;
                }
            };
            if writeln!(stdin, "{}", line).and_then(|_| stdin.flush()).is_err() {
                warn!("host process stdin closed");
                break;
            }
        }
    });

    // Reader: one inbound message per stdout line. EOF means the host went
    // away; that surfaces as a boundary error so the UI can re-enable its
    // controls.
    thread::spawn(move || {
        let reader = BufReader::new(stdout);
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    warn!(error = %err, "failed to read from host process");
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match InboundMessage::from_json_line(&line) {
                Ok(message) => {
                    debug!(request_id = ?message.request_id(), "host message received");
                    if in_tx.send(message).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    warn!(error = %err, "discarding unparseable host line");
                }
            }
        }
        let _ = in_tx.send(InboundMessage::HostError {
            request_id: None,
            message: "host connector disconnected".to_string(),
            detail: None,
        });
        reap(child);
    });

    Ok(BridgeHandle::from_channels(out_tx, in_rx))
}

fn reap(mut child: Child) {
    match child.wait() {
        Ok(status) => debug!(%status, "host process exited"),
        Err(err) => warn!(error = %err, "failed to reap host process"),
    }
}
