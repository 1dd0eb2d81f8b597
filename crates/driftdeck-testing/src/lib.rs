//! Test support: record builders and a scripted host connector.

pub mod builders;
pub mod scripted;

pub use builders::{record, record_at, sample_records, sample_sources};
pub use scripted::ScriptedHost;
