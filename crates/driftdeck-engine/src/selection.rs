//! Selection set and its page-level readouts.

use std::collections::HashSet;

use driftdeck_types::RecordId;

/// State of the header "select all visible" checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckbox {
    /// Every visible record is selected.
    Checked,
    /// Some, but not all, visible records are selected.
    Indeterminate,
    /// No visible record is selected.
    Unchecked,
}

/// The set of record ids the user has marked.
///
/// Membership is independent of visibility: a record filtered out of view
/// stays selected. After a refresh replaces the collection, stale ids may
/// linger here; they are never resolved locally - the host rejects
/// unresolvable ids at commit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<RecordId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: impl IntoIterator<Item = RecordId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Flip membership of `id`. Always valid, even for ids not present in
    /// the loaded collection (a row may be toggled just as data refreshes).
    ///
    /// Returns the new membership state.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Set every id in `ids` to the given membership state in one batch.
    ///
    /// Callers pass exactly the current page's visible ids, never the full
    /// derived view, so "select all" is scoped to what the user can see.
    pub fn set_many(&mut self, ids: &[RecordId], selected: bool) {
        for id in ids {
            if selected {
                self.ids.insert(id.clone());
            } else {
                self.ids.remove(id);
            }
        }
    }

    /// Empty the set. Invoked only after a confirmed successful commit.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Explicit id list for serialization, sorted for deterministic output.
    pub fn to_sorted_ids(&self) -> Vec<RecordId> {
        let mut ids: Vec<RecordId> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Tri-state readout for the header checkbox over the visible page
    pub fn header_state(&self, visible: &[RecordId]) -> HeaderCheckbox {
        if visible.is_empty() {
            return HeaderCheckbox::Unchecked;
        }
        let selected = visible.iter().filter(|id| self.contains(id)).count();
        if selected == 0 {
            HeaderCheckbox::Unchecked
        } else if selected == visible.len() {
            HeaderCheckbox::Checked
        } else {
            HeaderCheckbox::Indeterminate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> RecordId {
        RecordId::new(s)
    }

    #[test]
    fn toggle_round_trips() {
        let mut selection = SelectionSet::new();
        let before = selection.clone();

        assert!(selection.toggle(id("1")));
        assert!(!selection.toggle(id("1")));
        assert_eq!(selection, before);
    }

    #[test]
    fn toggle_accepts_ids_absent_from_any_collection() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle(id("ghost")));
        assert_eq!(selection.count(), 1);
        assert!(selection.contains(&id("ghost")));
    }

    #[test]
    fn set_many_batches_membership() {
        let mut selection = SelectionSet::new();
        let page = [id("1"), id("2"), id("3")];

        selection.set_many(&page, true);
        assert_eq!(selection.count(), 3);

        selection.set_many(&page[..2], false);
        assert_eq!(selection.count(), 1);
        assert!(selection.contains(&id("3")));
    }

    #[test]
    fn clear_empties_the_set() {
        let mut selection = SelectionSet::from_ids([id("1"), id("2")]);
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn header_state_tracks_visible_page() {
        let mut selection = SelectionSet::new();
        let page = [id("1"), id("2")];

        assert_eq!(selection.header_state(&page), HeaderCheckbox::Unchecked);

        selection.toggle(id("1"));
        assert_eq!(selection.header_state(&page), HeaderCheckbox::Indeterminate);

        selection.toggle(id("2"));
        assert_eq!(selection.header_state(&page), HeaderCheckbox::Checked);

        // Selection outside the page does not affect the readout
        selection.toggle(id("99"));
        assert_eq!(selection.header_state(&page), HeaderCheckbox::Checked);

        assert_eq!(selection.header_state(&[]), HeaderCheckbox::Unchecked);
    }

    #[test]
    fn sorted_ids_are_deterministic() {
        let selection = SelectionSet::from_ids([id("b"), id("a"), id("c")]);
        let sorted = selection.to_sorted_ids();
        assert_eq!(sorted, vec![id("a"), id("b"), id("c")]);
    }
}
