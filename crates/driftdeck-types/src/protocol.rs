//! Typed message protocol between the grid engine and its host connector.
//!
//! Every outbound request carries an engine-generated correlation id.
//! Inbound messages echo the id when the host can attribute them; messages
//! without a matching id are still applied (last response wins), they just
//! cannot be tied to a specific progress indicator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::{ChangeRecord, RecordId, SourceInfo};

/// Generate a fresh correlation id for an outbound request
pub fn new_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Payload of a commit submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRequest {
    /// Selected record ids. The host rejects ids it cannot resolve.
    pub ids: Vec<RecordId>,
    /// Fully composed commit message (ticket ref already folded in).
    pub message: String,
    /// Target source identifier.
    pub source: String,
}

/// Summary of a completed commit, as reported by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSummary {
    pub files_committed: usize,
    pub branch: String,
    pub revision: String,
}

/// Requests sent from the grid engine to the host connector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    /// Ask for the full record collection of a source.
    FetchRecords {
        request_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<String>,
        /// Optional category restriction applied host-side.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        categories: Vec<String>,
    },
    /// Ask for the available sources.
    ListSources { request_id: String },
    /// Submit a selection for commit.
    SubmitCommit {
        request_id: String,
        payload: CommitRequest,
    },
    /// Large submission: the host prompts the user before committing and
    /// either forwards to the commit path or reports a non-error
    /// cancellation.
    ConfirmCommit {
        request_id: String,
        payload: CommitRequest,
        item_count: usize,
    },
}

impl OutboundMessage {
    pub fn request_id(&self) -> &str {
        match self {
            OutboundMessage::FetchRecords { request_id, .. }
            | OutboundMessage::ListSources { request_id }
            | OutboundMessage::SubmitCommit { request_id, .. }
            | OutboundMessage::ConfirmCommit { request_id, .. } => request_id,
        }
    }

    /// Encode as one line of the newline-delimited wire format
    pub fn to_json_line(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Responses and events delivered by the host connector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundMessage {
    /// Full replacement record collection.
    RecordsLoaded {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
        records: Vec<ChangeRecord>,
    },
    /// Available sources.
    SourcesLoaded {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
        sources: Vec<SourceInfo>,
    },
    /// Informational step during a commit. Zero or more per submission.
    CommitProgress {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
        step: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
    },
    /// Terminal result of a submission. `cancelled` marks the non-error
    /// outcome of a declined large-submission confirmation.
    CommitCompleted {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
        success: bool,
        #[serde(default)]
        cancelled: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        summary: Option<CommitSummary>,
    },
    /// Host-side failure. `message` is user-visible, `detail` is logged.
    HostError {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
    },
}

impl InboundMessage {
    pub fn request_id(&self) -> Option<&str> {
        match self {
            InboundMessage::RecordsLoaded { request_id, .. }
            | InboundMessage::SourcesLoaded { request_id, .. }
            | InboundMessage::CommitProgress { request_id, .. }
            | InboundMessage::CommitCompleted { request_id, .. }
            | InboundMessage::HostError { request_id, .. } => request_id.as_deref(),
        }
    }

    /// Decode one line of the newline-delimited wire format
    pub fn from_json_line(line: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(line)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outbound_messages_are_tagged_snake_case() {
        let msg = OutboundMessage::FetchRecords {
            request_id: "r-1".to_string(),
            source: Some("prod".to_string()),
            categories: vec![],
        };

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "fetch_records");
        assert_eq!(json["request_id"], "r-1");
        assert_eq!(json["source"], "prod");
        // Empty category list is elided from the wire format
        assert!(json.get("categories").is_none());
    }

    #[test]
    fn inbound_commit_completed_defaults() {
        let json = r#"{"type":"commit_completed","success":true}"#;
        let msg: InboundMessage = serde_json::from_str(json).unwrap();

        match msg {
            InboundMessage::CommitCompleted {
                request_id,
                success,
                cancelled,
                summary,
            } => {
                assert!(request_id.is_none());
                assert!(success);
                assert!(!cancelled);
                assert!(summary.is_none());
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn request_ids_are_unique() {
        let a = new_request_id();
        let b = new_request_id();
        assert_ne!(a, b);
    }

    #[test]
    fn wire_line_round_trip() {
        let msg = OutboundMessage::ListSources {
            request_id: "r-7".to_string(),
        };
        let line = msg.to_json_line().unwrap();
        assert!(!line.contains('\n'));

        let back = InboundMessage::from_json_line(
            r#"{"type":"sources_loaded","sources":[{"id":"prod","label":"Production"}]}"#,
        )
        .unwrap();
        match back {
            InboundMessage::SourcesLoaded { sources, .. } => {
                assert_eq!(sources.len(), 1);
                assert_eq!(sources[0].id, "prod");
            }
            other => panic!("unexpected message: {:?}", other),
        }

        assert!(InboundMessage::from_json_line("{nope").is_err());
    }
}
