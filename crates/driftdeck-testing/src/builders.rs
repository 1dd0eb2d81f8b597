//! Fixture builders for change records and sources.

use driftdeck_types::{ChangeRecord, RecordId, SourceInfo};

/// Build a record with a parseable timestamp
pub fn record_at(id: &str, name: &str, category: &str, modified_by: &str, ts: &str) -> ChangeRecord {
    ChangeRecord {
        id: RecordId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        modified_by: modified_by.to_string(),
        modified_at: Some(ts.to_string()),
    }
}

/// Build a record without a timestamp
pub fn record(id: &str, name: &str, category: &str, modified_by: &str) -> ChangeRecord {
    ChangeRecord {
        id: RecordId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        modified_by: modified_by.to_string(),
        modified_at: None,
    }
}

/// The deterministic collection used by the demo connector and scenario
/// tests: three categories, three authors, a markup-looking name, and one
/// record with an unparseable timestamp.
pub fn sample_records() -> Vec<ChangeRecord> {
    vec![
        record_at("rec-01", "AccountPage", "Layout", "Bob", "2026-01-01T10:00:00Z"),
        record_at("rec-02", "ContactForm", "Layout", "Amy", "2026-01-02T10:00:00Z"),
        record_at("rec-03", "InvoiceFlow", "Flow", "Bob", "2026-01-03T10:00:00Z"),
        record_at("rec-04", "OrderTrigger", "Trigger", "Cleo", "2026-01-04T10:00:00Z"),
        record_at("rec-05", "QuoteCalc", "Flow", "Amy", "2026-01-05T10:00:00Z"),
        record_at("rec-06", "<b>LegacyWidget</b>", "Layout", "Bob", "2026-01-06T10:00:00Z"),
        ChangeRecord {
            id: RecordId::new("rec-07"),
            name: "ArchivedRule".to_string(),
            category: "Rule".to_string(),
            modified_by: "Cleo".to_string(),
            modified_at: Some("sometime in 2019".to_string()),
        },
        record("rec-08", "DraftBanner", "Layout", "Amy"),
    ]
}

pub fn sample_sources() -> Vec<SourceInfo> {
    vec![
        SourceInfo {
            id: "prod".to_string(),
            label: "Production".to_string(),
        },
        SourceInfo {
            id: "staging".to_string(),
            label: "Staging sandbox".to_string(),
        },
    ]
}
