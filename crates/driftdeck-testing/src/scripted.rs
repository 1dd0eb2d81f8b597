//! In-memory host connector with canned responses.
//!
//! Backs `--demo` mode and the integration tests: fetches return the
//! configured collection, commits stream two progress steps and then a
//! terminal result, and large-submission confirmations either proceed or
//! report a non-error cancellation.

use driftdeck_runtime::HostConnector;
use driftdeck_types::{
    ChangeRecord, CommitRequest, CommitSummary, InboundMessage, OutboundMessage, SourceInfo,
};

use crate::builders::{sample_records, sample_sources};

pub struct ScriptedHost {
    records: Vec<ChangeRecord>,
    sources: Vec<SourceInfo>,
    /// When set, every commit fails with this message.
    commit_failure: Option<String>,
    /// When true, confirmation prompts are declined.
    decline_confirmations: bool,
    commits_seen: usize,
}

impl Default for ScriptedHost {
    fn default() -> Self {
        Self::with_sample_data()
    }
}

impl ScriptedHost {
    pub fn with_sample_data() -> Self {
        Self {
            records: sample_records(),
            sources: sample_sources(),
            commit_failure: None,
            decline_confirmations: false,
            commits_seen: 0,
        }
    }

    pub fn with_records(records: Vec<ChangeRecord>) -> Self {
        Self {
            records,
            sources: sample_sources(),
            commit_failure: None,
            decline_confirmations: false,
            commits_seen: 0,
        }
    }

    pub fn failing_commits(mut self, message: impl Into<String>) -> Self {
        self.commit_failure = Some(message.into());
        self
    }

    pub fn declining_confirmations(mut self) -> Self {
        self.decline_confirmations = true;
        self
    }

    fn commit(
        &mut self,
        request_id: String,
        payload: &CommitRequest,
        respond: &mut dyn FnMut(InboundMessage),
    ) {
        respond(InboundMessage::CommitProgress {
            request_id: Some(request_id.clone()),
            step: "Staging files".to_string(),
            detail: Some(format!("{} components", payload.ids.len())),
        });
        respond(InboundMessage::CommitProgress {
            request_id: Some(request_id.clone()),
            step: "Committing".to_string(),
            detail: None,
        });

        if let Some(message) = &self.commit_failure {
            respond(InboundMessage::HostError {
                request_id: Some(request_id),
                message: message.clone(),
                detail: Some("scripted failure".to_string()),
            });
            return;
        }

        self.commits_seen += 1;
        respond(InboundMessage::CommitCompleted {
            request_id: Some(request_id),
            success: true,
            cancelled: false,
            summary: Some(CommitSummary {
                files_committed: payload.ids.len(),
                branch: "feature/drift-review".to_string(),
                revision: format!("rev-{:04}", self.commits_seen),
            }),
        });
    }
}

impl HostConnector for ScriptedHost {
    fn handle(&mut self, request: OutboundMessage, respond: &mut dyn FnMut(InboundMessage)) {
        match request {
            OutboundMessage::FetchRecords { request_id, .. } => {
                respond(InboundMessage::RecordsLoaded {
                    request_id: Some(request_id),
                    records: self.records.clone(),
                });
            }
            OutboundMessage::ListSources { request_id } => {
                respond(InboundMessage::SourcesLoaded {
                    request_id: Some(request_id),
                    sources: self.sources.clone(),
                });
            }
            OutboundMessage::SubmitCommit {
                request_id,
                payload,
            } => {
                self.commit(request_id, &payload, respond);
            }
            OutboundMessage::ConfirmCommit {
                request_id,
                payload,
                ..
            } => {
                if self.decline_confirmations {
                    respond(InboundMessage::CommitCompleted {
                        request_id: Some(request_id),
                        success: false,
                        cancelled: true,
                        summary: None,
                    });
                } else {
                    self.commit(request_id, &payload, respond);
                }
            }
        }
    }
}
