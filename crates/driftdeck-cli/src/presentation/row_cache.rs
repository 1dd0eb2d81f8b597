//! Cache of built rows for the visible page.
//!
//! A full page render rebuilds every row view model; a single selection
//! toggle patches one cached row in place, keyed by record id, without
//! re-deriving the view or touching sibling rows. When a targeted update
//! cannot find its row (it was already dropped by a concurrent change)
//! the cache falls back to a full rebuild instead of failing.

use std::collections::HashMap;

use driftdeck_engine::{GridState, RenderPlan};
use driftdeck_types::RecordId;
use tracing::debug;

use super::view_models::RowViewModel;

#[derive(Debug, Default)]
pub struct RowCache {
    rows: Vec<RowViewModel>,
    index: HashMap<RecordId, usize>,
}

impl RowCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[RowViewModel] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Apply a render plan from the grid state machine
    pub fn apply(&mut self, plan: &RenderPlan, grid: &GridState) {
        match plan {
            RenderPlan::FullPage => self.rebuild(grid),
            RenderPlan::PatchRow { id, selected } => {
                if !self.patch_selection(id, *selected) {
                    debug!(id = %id, "patch target missing; falling back to full rebuild");
                    self.rebuild(grid);
                }
            }
            RenderPlan::RemoveRow { id } => {
                if !self.remove(id) {
                    debug!(id = %id, "remove target missing; falling back to full rebuild");
                    self.rebuild(grid);
                }
            }
        }
    }

    /// Rebuild every row for the current page
    pub fn rebuild(&mut self, grid: &GridState) {
        let selection = grid.selection();
        self.rows = grid
            .page_records()
            .into_iter()
            .map(|record| RowViewModel::build(record, selection.contains(&record.id)))
            .collect();
        self.reindex();
    }

    /// Patch one row's selection state in place. Returns false when the
    /// row is not in the cache.
    pub fn patch_selection(&mut self, id: &RecordId, selected: bool) -> bool {
        match self.index.get(id) {
            Some(&position) => {
                self.rows[position].patch_selection(selected);
                true
            }
            None => false,
        }
    }

    /// Drop one row without touching its siblings. Returns false when the
    /// row is not in the cache.
    pub fn remove(&mut self, id: &RecordId) -> bool {
        match self.index.remove(id) {
            Some(position) => {
                self.rows.remove(position);
                self.reindex();
                true
            }
            None => false,
        }
    }

    fn reindex(&mut self) {
        self.index = self
            .rows
            .iter()
            .enumerate()
            .map(|(position, row)| (row.id.clone(), position))
            .collect();
    }
}
