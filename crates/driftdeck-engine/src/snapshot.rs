//! Serializable snapshot of grid state for restore-on-reshow.

use driftdeck_types::{ChangeRecord, RecordId};
use serde::{Deserialize, Serialize};

use crate::criteria::{ColumnFilters, SortColumn, SortDirection, Tab};

/// Everything needed to rebuild the grid after the surface was hidden:
/// the record collection, the selection as an explicit id list, and the
/// active criteria and pagination.
///
/// Selection is serialized as a list rather than a set so the format never
/// depends on hash ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub records: Vec<ChangeRecord>,
    pub selected_ids: Vec<RecordId>,
    #[serde(default)]
    pub tab: Tab,
    #[serde(default)]
    pub filters: ColumnFilters,
    #[serde(default)]
    pub sort_column: SortColumn,
    #[serde(default)]
    pub sort_direction: SortDirection,
    pub page_size: usize,
    pub current_page: usize,
}
