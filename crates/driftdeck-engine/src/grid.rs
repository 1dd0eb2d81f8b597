//! Grid state machine: one owner for records, selection, criteria and
//! pagination, with each input event mapped to the cheapest sufficient
//! render strategy.

use driftdeck_types::{ChangeRecord, RecordId};
use tracing::debug;

use crate::criteria::{SortColumn, SortDirection, Tab, ViewCriteria};
use crate::pager::{slice_page, PageSlice, DEFAULT_PAGE_SIZE};
use crate::selection::{HeaderCheckbox, SelectionSet};
use crate::snapshot::SessionSnapshot;
use crate::view::derive_view;

/// Instruction to the renderer after a state transition.
///
/// `FullPage` redraws the visible page from scratch; the two targeted
/// variants touch a single row. A renderer that cannot locate the row
/// (already gone after a concurrent change) falls back to a full redraw
/// rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPlan {
    FullPage,
    PatchRow { id: RecordId, selected: bool },
    RemoveRow { id: RecordId },
}

/// Exclusive owner of all grid state.
///
/// Every mutation goes through a method here; each recomputes exactly what
/// its event requires and returns the [`RenderPlan`] the renderer should
/// apply. The derived view is cached as indices into `records` and rebuilt
/// whenever scope, filters, sort, records or (on the selected tab) the
/// selection change.
#[derive(Debug, Clone)]
pub struct GridState {
    records: Vec<ChangeRecord>,
    selection: SelectionSet,
    criteria: ViewCriteria,
    page_size: usize,
    current_page: usize,
    view: Vec<usize>,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

impl GridState {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            selection: SelectionSet::new(),
            criteria: ViewCriteria::default(),
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
            view: Vec::new(),
        }
    }

    /// Recompute the derived view and clamp the current page into range
    fn refresh(&mut self) {
        self.view = derive_view(&self.records, &self.selection, &self.criteria);
        let slice = slice_page(self.view.len(), self.page_size, self.current_page);
        self.current_page = slice.effective_page;
    }

    // --- Events ---------------------------------------------------------

    /// A fresh record collection arrived; replaces everything, back to
    /// page 1. A late response always wins.
    pub fn replace_records(&mut self, records: Vec<ChangeRecord>) -> RenderPlan {
        debug!(count = records.len(), "replacing record collection");
        self.records = records;
        self.current_page = 1;
        self.refresh();
        RenderPlan::FullPage
    }

    pub fn set_name_filter(&mut self, filter: String) -> RenderPlan {
        self.criteria.filters.name = filter;
        self.current_page = 1;
        self.refresh();
        RenderPlan::FullPage
    }

    pub fn set_modified_by_filter(&mut self, filter: String) -> RenderPlan {
        self.criteria.filters.modified_by = filter;
        self.current_page = 1;
        self.refresh();
        RenderPlan::FullPage
    }

    pub fn set_category_filter(&mut self, category: Option<String>) -> RenderPlan {
        self.criteria.filters.category = category;
        self.current_page = 1;
        self.refresh();
        RenderPlan::FullPage
    }

    /// Header click: selecting the active column flips direction, a new
    /// column starts ascending. Sort never resets pagination.
    pub fn toggle_sort(&mut self, column: SortColumn) -> RenderPlan {
        if self.criteria.sort_column == column {
            self.criteria.sort_direction = self.criteria.sort_direction.flipped();
        } else {
            self.criteria.sort_column = column;
            self.criteria.sort_direction = SortDirection::Asc;
        }
        self.refresh();
        RenderPlan::FullPage
    }

    pub fn set_tab(&mut self, tab: Tab) -> RenderPlan {
        if self.criteria.tab != tab {
            self.criteria.tab = tab;
            self.current_page = 1;
            self.refresh();
        }
        RenderPlan::FullPage
    }

    pub fn set_page_size(&mut self, page_size: usize) -> RenderPlan {
        self.page_size = page_size.max(1);
        self.current_page = 1;
        self.refresh();
        RenderPlan::FullPage
    }

    pub fn next_page(&mut self) -> Option<RenderPlan> {
        let slice = self.page();
        if slice.is_last() {
            return None;
        }
        self.current_page += 1;
        Some(RenderPlan::FullPage)
    }

    pub fn prev_page(&mut self) -> Option<RenderPlan> {
        if self.current_page <= 1 {
            return None;
        }
        self.current_page -= 1;
        Some(RenderPlan::FullPage)
    }

    /// Single checkbox toggle.
    ///
    /// On the All tab the record stays in view, so one row is patched in
    /// place. On the Selected tab a deselection shrinks the view: either
    /// the row alone is removed, or - when the page ran off the end - the
    /// corrected page is fully redrawn.
    pub fn toggle_row(&mut self, id: RecordId) -> RenderPlan {
        let selected = self.selection.toggle(id.clone());

        if self.criteria.tab == Tab::Selected {
            let prev_page = self.current_page;
            self.refresh();
            if !selected && self.current_page == prev_page {
                RenderPlan::RemoveRow { id }
            } else {
                RenderPlan::FullPage
            }
        } else {
            RenderPlan::PatchRow { id, selected }
        }
    }

    /// Header checkbox: batch-set exactly the visible page's ids.
    /// The visible set changes uniformly, so a full redraw is the simplest
    /// correct strategy.
    pub fn set_all_visible(&mut self, selected: bool) -> RenderPlan {
        let visible = self.page_ids();
        self.selection.set_many(&visible, selected);
        if self.criteria.tab == Tab::Selected {
            self.refresh();
        }
        RenderPlan::FullPage
    }

    /// A confirmed successful commit clears the selection wholesale; the
    /// caller triggers a fresh fetch separately.
    pub fn commit_succeeded(&mut self) -> RenderPlan {
        self.selection.clear();
        self.refresh();
        RenderPlan::FullPage
    }

    // --- Readouts -------------------------------------------------------

    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn criteria(&self) -> &ViewCriteria {
        &self.criteria
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page(&self) -> PageSlice {
        slice_page(self.view.len(), self.page_size, self.current_page)
    }

    /// Records on the currently visible page, in view order
    pub fn page_records(&self) -> Vec<&ChangeRecord> {
        let slice = self.page();
        self.view[slice.start..slice.end]
            .iter()
            .map(|&index| &self.records[index])
            .collect()
    }

    /// Ids of the currently visible page, in view order
    pub fn page_ids(&self) -> Vec<RecordId> {
        self.page_records()
            .into_iter()
            .map(|record| record.id.clone())
            .collect()
    }

    /// Count for the "selected" tab badge
    pub fn selection_count(&self) -> usize {
        self.selection.count()
    }

    pub fn header_checkbox(&self) -> HeaderCheckbox {
        self.selection.header_state(&self.page_ids())
    }

    // --- Snapshot -------------------------------------------------------

    pub fn capture(&self) -> SessionSnapshot {
        SessionSnapshot {
            records: self.records.clone(),
            selected_ids: self.selection.to_sorted_ids(),
            tab: self.criteria.tab,
            filters: self.criteria.filters.clone(),
            sort_column: self.criteria.sort_column,
            sort_direction: self.criteria.sort_direction,
            page_size: self.page_size,
            current_page: self.current_page,
        }
    }

    /// Rebuild grid state from a snapshot, re-deriving the view and
    /// re-clamping the page so a stale snapshot can never point past the
    /// last page.
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        let mut state = Self {
            records: snapshot.records,
            selection: SelectionSet::from_ids(snapshot.selected_ids),
            criteria: ViewCriteria {
                tab: snapshot.tab,
                filters: snapshot.filters,
                sort_column: snapshot.sort_column,
                sort_direction: snapshot.sort_direction,
            },
            page_size: snapshot.page_size.max(1),
            current_page: snapshot.current_page.max(1),
            view: Vec::new(),
        };
        state.refresh();
        state
    }
}
