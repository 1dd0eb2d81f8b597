//! Channel bridge between the grid and a host connector.
//!
//! Requests are fire-and-forget from the grid's perspective; responses
//! arrive later as independent inbound events and are drained without
//! blocking. Message delivery is unordered with respect to user input, so
//! a late response is applied like any other (last response wins).

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread;

use driftdeck_types::{InboundMessage, OutboundMessage};
use tracing::{debug, warn};

/// A host connector consumes one request at a time and pushes zero or more
/// responses through `respond`. Implementations run on the bridge thread.
pub trait HostConnector: Send + 'static {
    fn handle(&mut self, request: OutboundMessage, respond: &mut dyn FnMut(InboundMessage));
}

/// Grid-side handle to the connector channel pair
pub struct BridgeHandle {
    tx: Sender<OutboundMessage>,
    rx: Receiver<InboundMessage>,
}

impl BridgeHandle {
    pub fn from_channels(tx: Sender<OutboundMessage>, rx: Receiver<InboundMessage>) -> Self {
        Self { tx, rx }
    }

    /// Send a request without blocking. A dead connector is logged, not
    /// surfaced; the matching boundary error arrives as an inbound event.
    pub fn send(&self, request: OutboundMessage) {
        debug!(request_id = request.request_id(), "sending host request");
        if self.tx.send(request).is_err() {
            warn!("host connector channel closed; request dropped");
        }
    }

    /// Block for the next inbound message, up to `timeout`. Used by the
    /// one-shot commands; the TUI loop drains instead.
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<InboundMessage> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Drain every inbound message currently queued, without blocking
    pub fn drain(&self) -> Vec<InboundMessage> {
        let mut messages = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(message) => messages.push(message),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        messages
    }
}

/// Run a connector on its own thread, returning the grid-side handle
pub fn spawn_connector(mut connector: impl HostConnector) -> BridgeHandle {
    let (out_tx, out_rx) = channel::<OutboundMessage>();
    let (in_tx, in_rx) = channel::<InboundMessage>();

    thread::spawn(move || {
        while let Ok(request) = out_rx.recv() {
            let mut respond = |message: InboundMessage| {
                // The grid may have shut down already; nothing to do then.
                let _ = in_tx.send(message);
            };
            connector.handle(request, &mut respond);
        }
    });

    BridgeHandle::from_channels(out_tx, in_rx)
}

/// What a pending request was for, to scope progress indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Fetch,
    Sources,
    Commit,
}

/// Correlation ledger for in-flight requests.
///
/// This only drives spinners and progress attribution. State application
/// never consults it: an inbound message without a matching id is applied
/// all the same.
#[derive(Debug, Default)]
pub struct RequestTracker {
    pending: HashMap<String, RequestKind>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, request_id: impl Into<String>, kind: RequestKind) {
        self.pending.insert(request_id.into(), kind);
    }

    /// Resolve a terminal response against the ledger. Returns the request
    /// kind when the id was known; unmatched or absent ids yield `None`.
    pub fn finish(&mut self, request_id: Option<&str>) -> Option<RequestKind> {
        request_id.and_then(|id| self.pending.remove(id))
    }

    pub fn is_pending(&self, kind: RequestKind) -> bool {
        self.pending.values().any(|&pending| pending == kind)
    }

    /// Drop every pending entry of the given kind. Used when a terminal
    /// message without a correlation id ends an operation anyway.
    pub fn clear_kind(&mut self, kind: RequestKind) {
        self.pending.retain(|_, pending| *pending != kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftdeck_types::new_request_id;

    struct EchoConnector;

    impl HostConnector for EchoConnector {
        fn handle(&mut self, request: OutboundMessage, respond: &mut dyn FnMut(InboundMessage)) {
            respond(InboundMessage::HostError {
                request_id: Some(request.request_id().to_string()),
                message: "echo".to_string(),
                detail: None,
            });
        }
    }

    #[test]
    fn responses_flow_back_through_the_handle() {
        let handle = spawn_connector(EchoConnector);
        let request_id = new_request_id();
        handle.send(OutboundMessage::ListSources {
            request_id: request_id.clone(),
        });

        // The connector thread races the drain; poll briefly.
        let mut messages = Vec::new();
        for _ in 0..50 {
            messages.extend(handle.drain());
            if !messages.is_empty() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].request_id(), Some(request_id.as_str()));
    }

    #[test]
    fn tracker_scopes_spinners_by_kind() {
        let mut tracker = RequestTracker::new();
        tracker.track("a", RequestKind::Fetch);
        tracker.track("b", RequestKind::Commit);

        assert!(tracker.is_pending(RequestKind::Fetch));
        assert_eq!(tracker.finish(Some("a")), Some(RequestKind::Fetch));
        assert!(!tracker.is_pending(RequestKind::Fetch));

        // Unmatched ids resolve to nothing but are not an error.
        assert_eq!(tracker.finish(Some("zzz")), None);
        assert_eq!(tracker.finish(None), None);

        tracker.clear_kind(RequestKind::Commit);
        assert!(!tracker.is_pending(RequestKind::Commit));
    }
}
