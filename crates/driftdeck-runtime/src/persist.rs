//! Data directory resolution and the session snapshot store.

use std::path::{Path, PathBuf};

use driftdeck_engine::SessionSnapshot;
use tracing::{debug, warn};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Config(String),
    Codec(serde_json::Error),
    Toml(toml::de::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Config error: {}", msg),
            Error::Codec(err) => write!(f, "codec error: {}", err),
            Error::Toml(err) => write!(f, "config parse error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
            Error::Codec(err) => Some(err),
            Error::Toml(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Codec(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. DRIFTDECK_PATH environment variable (with tilde expansion)
/// 3. System data directory (recommended default)
/// 4. ~/.driftdeck (fallback for systems without standard data directory)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("DRIFTDECK_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("driftdeck"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".driftdeck"));
    }

    Err(Error::Config(
        "cannot resolve a data directory; pass --data-dir or set DRIFTDECK_PATH".to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(path)
}

/// Stores the session snapshot as a JSON file in the data directory.
///
/// Writes go through a sibling temp file and an atomic rename so a crash
/// mid-write never leaves a truncated snapshot behind.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("session.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored snapshot, if any.
    ///
    /// A missing file is a normal first run. A snapshot that no longer
    /// parses is discarded with a warning rather than blocking startup.
    pub fn load(&self) -> Result<Option<SessionSnapshot>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "discarding unreadable session snapshot");
                Ok(None)
            }
        }
    }

    pub fn save(&self, snapshot: &SessionSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(snapshot)?)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "session snapshot written");
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Debounced snapshot persistence: the grid schedules the latest capture,
/// and after the quiescence window elapses the newest pending snapshot is
/// written. Intermediate captures are simply superseded.
pub struct SnapshotWriter {
    pending: std::sync::Arc<std::sync::Mutex<Option<SessionSnapshot>>>,
    debouncer: crate::debounce::Debouncer,
}

impl SnapshotWriter {
    pub fn spawn(store: SnapshotStore, delay: std::time::Duration) -> Self {
        let pending = std::sync::Arc::new(std::sync::Mutex::new(None::<SessionSnapshot>));
        let cell = pending.clone();
        let debouncer = crate::debounce::Debouncer::new(delay, move || {
            let snapshot = cell.lock().unwrap().take();
            if let Some(snapshot) = snapshot {
                if let Err(err) = store.save(&snapshot) {
                    warn!(error = %err, "session snapshot write failed");
                }
            }
        });
        Self { pending, debouncer }
    }

    /// Replace the pending capture and restart the quiescence window
    pub fn schedule(&self, snapshot: SessionSnapshot) {
        *self.pending.lock().unwrap() = Some(snapshot);
        self.debouncer.poke();
    }
}
