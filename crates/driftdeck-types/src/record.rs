use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier of a change record (origin-assigned, opaque)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One detected change to a named component.
///
/// The collection is replaced atomically whenever a fetch completes;
/// individual records are never mutated in place. `id` uniqueness within a
/// collection is guaranteed by the host, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// Origin-assigned identifier, immutable for the record's lifetime.
    pub id: RecordId,
    /// Display name of the changed component.
    pub name: String,
    /// Type tag classifier (e.g. component kind).
    pub category: String,
    /// Who last modified the component.
    #[serde(default)]
    pub modified_by: String,
    /// ISO-8601 timestamp of the last modification. May be absent, and the
    /// host does not guarantee it parses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
}

impl ChangeRecord {
    /// Parse `modified_at` as an RFC 3339 timestamp.
    ///
    /// Returns `None` for absent or unparseable values, which sort lowest
    /// and render as the raw string.
    pub fn modified_at_ts(&self) -> Option<DateTime<Utc>> {
        self.modified_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|ts| ts.with_timezone(&Utc))
    }
}

/// A source the host can fetch change records from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Opaque source identifier, used as the commit target.
    pub id: String,
    /// Human-readable label for listings.
    pub label: String,
}
