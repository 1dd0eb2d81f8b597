//! Built-in demo connector: a deterministic in-memory host so the grid is
//! drivable without a real host process.

use driftdeck_runtime::HostConnector;
use driftdeck_types::{
    ChangeRecord, CommitSummary, InboundMessage, OutboundMessage, RecordId, SourceInfo,
};

pub struct DemoConnector {
    commits_seen: usize,
}

impl DemoConnector {
    pub fn new() -> Self {
        Self { commits_seen: 0 }
    }
}

impl Default for DemoConnector {
    fn default() -> Self {
        Self::new()
    }
}

fn record(id: &str, name: &str, category: &str, modified_by: &str, ts: &str) -> ChangeRecord {
    ChangeRecord {
        id: RecordId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        modified_by: modified_by.to_string(),
        modified_at: Some(ts.to_string()),
    }
}

pub fn demo_records() -> Vec<ChangeRecord> {
    vec![
        record("demo-01", "AccountPage", "Layout", "Bob", "2026-01-01T10:00:00Z"),
        record("demo-02", "ContactForm", "Layout", "Amy", "2026-01-02T10:00:00Z"),
        record("demo-03", "InvoiceFlow", "Flow", "Bob", "2026-01-03T10:00:00Z"),
        record("demo-04", "OrderTrigger", "Trigger", "Cleo", "2026-01-04T10:00:00Z"),
        record("demo-05", "QuoteCalc", "Flow", "Amy", "2026-01-05T09:30:00Z"),
        record("demo-06", "ShippingRule", "Rule", "Bob", "2026-01-05T16:45:00Z"),
        record("demo-07", "RefundFlow", "Flow", "Cleo", "2026-01-06T08:15:00Z"),
        record("demo-08", "PricingMatrix", "Rule", "Amy", "2026-01-06T11:00:00Z"),
        record("demo-09", "LeadRouter", "Trigger", "Bob", "2026-01-07T14:20:00Z"),
        record("demo-10", "CasePage", "Layout", "Cleo", "2026-01-07T17:05:00Z"),
        record("demo-11", "RenewalFlow", "Flow", "Amy", "2026-01-08T09:00:00Z"),
        record("demo-12", "AuditTrigger", "Trigger", "Bob", "2026-01-08T12:40:00Z"),
        // Timestamp the origin never parsed; renders as the raw string.
        ChangeRecord {
            id: RecordId::new("demo-13"),
            name: "ArchivedRule".to_string(),
            category: "Rule".to_string(),
            modified_by: "Cleo".to_string(),
            modified_at: Some("sometime in 2019".to_string()),
        },
        ChangeRecord {
            id: RecordId::new("demo-14"),
            name: "DraftBanner".to_string(),
            category: "Layout".to_string(),
            modified_by: "Amy".to_string(),
            modified_at: None,
        },
    ]
}

impl HostConnector for DemoConnector {
    fn handle(&mut self, request: OutboundMessage, respond: &mut dyn FnMut(InboundMessage)) {
        match request {
            OutboundMessage::FetchRecords { request_id, .. } => {
                respond(InboundMessage::RecordsLoaded {
                    request_id: Some(request_id),
                    records: demo_records(),
                });
            }
            OutboundMessage::ListSources { request_id } => {
                respond(InboundMessage::SourcesLoaded {
                    request_id: Some(request_id),
                    sources: vec![
                        SourceInfo {
                            id: "demo".to_string(),
                            label: "Demo sandbox".to_string(),
                        },
                    ],
                });
            }
            OutboundMessage::SubmitCommit {
                request_id,
                payload,
            }
            | OutboundMessage::ConfirmCommit {
                request_id,
                payload,
                ..
            } => {
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
                self.commits_seen += 1;
                respond(InboundMessage::CommitCompleted {
                    request_id: Some(request_id),
                    success: true,
                    cancelled: false,
                    summary: Some(CommitSummary {
                        files_committed: payload.ids.len(),
                        branch: "feature/drift-review".to_string(),
                        revision: format!("demo-rev-{:04}", self.commits_seen),
                    }),
                });
            }
        }
    }
}
