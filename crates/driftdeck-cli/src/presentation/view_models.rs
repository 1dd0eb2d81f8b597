//! Pre-formatted display structs consumed by the views.

use driftdeck_engine::{HeaderCheckbox, SortColumn, SortDirection, Tab};
use driftdeck_types::{ChangeRecord, RecordId};

use super::formatters::time::format_modified_at;

/// One rendered grid row, keyed by its record id.
///
/// Cell text is plain string content; record fields are never parsed as
/// markup or styling, so a name like `<b>Legacy</b>` renders as exactly
/// that text. Built once per page render and patched in place when only
/// the selection flag changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowViewModel {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub modified_by: String,
    /// Intentionally mirrors `modified_by`; the layout documents the
    /// Created By column as a duplicate of the modifier until a richer
    /// data source exists.
    pub created_by: String,
    pub modified_at: String,
    pub selected: bool,
}

impl RowViewModel {
    pub fn build(record: &ChangeRecord, selected: bool) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            category: record.category.clone(),
            modified_by: record.modified_by.clone(),
            created_by: record.modified_by.clone(),
            modified_at: format_modified_at(record.modified_at.as_deref()),
            selected,
        }
    }

    /// Targeted patch: flip the selection indicator in place. The result
    /// must be indistinguishable from a freshly built row.
    pub fn patch_selection(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn checkbox(&self) -> &'static str {
        if self.selected {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

/// Tab strip with the selection badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsViewModel {
    pub tab: Tab,
    pub all_count: usize,
    pub selected_count: usize,
    pub source: String,
}

/// Column headers with the tri-state checkbox and sort indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridHeaderViewModel {
    pub checkbox: HeaderCheckbox,
    pub columns: Vec<String>,
}

impl GridHeaderViewModel {
    pub fn build(checkbox: HeaderCheckbox, sort: SortColumn, direction: SortDirection) -> Self {
        let indicator = match direction {
            SortDirection::Asc => " ^",
            SortDirection::Desc => " v",
        };
        let title = |label: &str, column: SortColumn| {
            if column == sort {
                format!("{}{}", label, indicator)
            } else {
                label.to_string()
            }
        };

        Self {
            checkbox,
            columns: vec![
                title("Name", SortColumn::Name),
                title("Category", SortColumn::Category),
                title("Last Modified By", SortColumn::ModifiedBy),
                "Created By".to_string(),
                title("Last Modified", SortColumn::ModifiedAt),
            ],
        }
    }

    pub fn checkbox_cell(&self) -> &'static str {
        match self.checkbox {
            HeaderCheckbox::Checked => "[x]",
            HeaderCheckbox::Indeterminate => "[~]",
            HeaderCheckbox::Unchecked => "[ ]",
        }
    }
}

/// Page position and controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerViewModel {
    pub effective_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub item_count: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Filter readouts, spinner text, and key hints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusViewModel {
    pub filter_name: String,
    pub filter_modified_by: String,
    pub filter_category: Option<String>,
    pub editing_hint: Option<String>,
    pub busy: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerViewModel {
    pub kind: BannerKind,
    pub text: String,
}

/// Which compose field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeField {
    Message,
    Ticket,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeViewModel {
    pub message: String,
    pub ticket: String,
    pub field: ComposeField,
    pub item_count: usize,
}

/// Everything one frame needs, besides the row cache itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenViewModel {
    pub tabs: TabsViewModel,
    pub header: GridHeaderViewModel,
    pub pager: PagerViewModel,
    pub status: StatusViewModel,
    pub banner: Option<BannerViewModel>,
    pub compose: Option<ComposeViewModel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ChangeRecord {
        ChangeRecord {
            id: RecordId::new("1"),
            name: name.to_string(),
            category: "Layout".to_string(),
            modified_by: "Bob".to_string(),
            modified_at: Some("2026-01-01T10:00:00Z".to_string()),
        }
    }

    #[test]
    fn patch_matches_a_fresh_build_exactly() {
        let record = record("AccountPage");

        let mut patched = RowViewModel::build(&record, false);
        patched.patch_selection(true);
        assert_eq!(patched, RowViewModel::build(&record, true));

        patched.patch_selection(false);
        assert_eq!(patched, RowViewModel::build(&record, false));
    }

    #[test]
    fn markup_like_names_stay_literal_text() {
        let row = RowViewModel::build(&record("<b>LegacyWidget</b>"), false);
        assert_eq!(row.name, "<b>LegacyWidget</b>");
    }

    #[test]
    fn created_by_duplicates_the_modifier() {
        let row = RowViewModel::build(&record("AccountPage"), false);
        assert_eq!(row.created_by, row.modified_by);
    }

    #[test]
    fn sort_indicator_follows_the_active_column() {
        let header = GridHeaderViewModel::build(
            HeaderCheckbox::Unchecked,
            SortColumn::Name,
            SortDirection::Asc,
        );
        assert_eq!(header.columns[0], "Name ^");
        assert_eq!(header.columns[4], "Last Modified");

        let header = GridHeaderViewModel::build(
            HeaderCheckbox::Indeterminate,
            SortColumn::ModifiedAt,
            SortDirection::Desc,
        );
        assert_eq!(header.columns[4], "Last Modified v");
        assert_eq!(header.checkbox_cell(), "[~]");
    }
}
