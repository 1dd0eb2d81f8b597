use driftdeck_types::ChangeRecord;
use serde::{Deserialize, Serialize};

/// Which subset of records is eligible at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    /// Every record in the loaded collection (default).
    #[default]
    All,
    /// Only records whose id is in the selection set.
    Selected,
}

/// Sortable grid column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Name,
    Category,
    ModifiedBy,
    /// Last-modified timestamp (default). Compared semantically; absent or
    /// unparseable values sort lowest.
    #[default]
    ModifiedAt,
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    /// Default for the initial timestamp sort (newest first).
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active column filters, AND-combined.
///
/// Substring filters match case-insensitively; the category filter is an
/// exact match. An empty filter matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnFilters {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub modified_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ColumnFilters {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.modified_by.is_empty() && self.category.is_none()
    }

    /// True when every active filter matches the record
    pub fn matches(&self, record: &ChangeRecord) -> bool {
        if !substring_matches(&record.name, &self.name) {
            return false;
        }
        if !substring_matches(&record.modified_by, &self.modified_by) {
            return false;
        }
        if let Some(category) = &self.category {
            if record.category != *category {
                return false;
            }
        }
        true
    }
}

fn substring_matches(value: &str, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    value.to_lowercase().contains(&filter.to_lowercase())
}

/// The active tab, column filters, and sort key.
///
/// Always applied in a fixed order - tab scope, then filters, then sort -
/// so that sort never influences which records are included, only their
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewCriteria {
    pub tab: Tab,
    pub filters: ColumnFilters,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftdeck_types::RecordId;

    fn record(name: &str, category: &str, modified_by: &str) -> ChangeRecord {
        ChangeRecord {
            id: RecordId::new("1"),
            name: name.to_string(),
            category: category.to_string(),
            modified_by: modified_by.to_string(),
            modified_at: None,
        }
    }

    #[test]
    fn empty_filters_match_everything() {
        let filters = ColumnFilters::default();
        assert!(filters.is_empty());
        assert!(filters.matches(&record("Alpha", "X", "Bob")));
        assert!(filters.matches(&record("", "", "")));
    }

    #[test]
    fn substring_filter_is_case_insensitive() {
        let filters = ColumnFilters {
            name: "ALPH".to_string(),
            ..Default::default()
        };
        assert!(filters.matches(&record("alpha layout", "X", "Bob")));
        assert!(!filters.matches(&record("Beta", "X", "Bob")));
    }

    #[test]
    fn absent_field_never_matches_non_empty_filter() {
        let filters = ColumnFilters {
            modified_by: "bob".to_string(),
            ..Default::default()
        };
        assert!(!filters.matches(&record("Alpha", "X", "")));
    }

    #[test]
    fn category_filter_is_exact() {
        let filters = ColumnFilters {
            category: Some("X".to_string()),
            ..Default::default()
        };
        assert!(filters.matches(&record("Alpha", "X", "Bob")));
        assert!(!filters.matches(&record("Alpha", "XY", "Bob")));
        assert!(!filters.matches(&record("Alpha", "x", "Bob")));
    }

    #[test]
    fn filters_are_and_combined() {
        let filters = ColumnFilters {
            name: "alp".to_string(),
            category: Some("X".to_string()),
            ..Default::default()
        };
        assert!(filters.matches(&record("Alpha", "X", "Bob")));
        assert!(!filters.matches(&record("Alpha", "Y", "Bob")));
        assert!(!filters.matches(&record("Beta", "X", "Bob")));
    }

    #[test]
    fn default_criteria_sorts_newest_first() {
        let criteria = ViewCriteria::default();
        assert_eq!(criteria.tab, Tab::All);
        assert_eq!(criteria.sort_column, SortColumn::ModifiedAt);
        assert_eq!(criteria.sort_direction, SortDirection::Desc);
        assert!(criteria.filters.is_empty());
    }
}
