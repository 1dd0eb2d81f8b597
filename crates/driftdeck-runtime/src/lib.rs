//! Boundary and lifecycle layer for driftdeck.
//!
//! Carries the asynchronous message channel to the host connector, the
//! request-correlation ledger, the session snapshot store, and the
//! debounced persistence scheduler. Nothing here knows about terminals or
//! rendering.

pub mod bridge;
pub mod config;
pub mod debounce;
pub mod persist;
pub mod process_host;

pub use bridge::{spawn_connector, BridgeHandle, HostConnector, RequestKind, RequestTracker};
pub use config::Config;
pub use debounce::Debouncer;
pub use persist::{resolve_data_dir, Error, Result, SnapshotStore, SnapshotWriter};
pub use process_host::spawn_process_host;
