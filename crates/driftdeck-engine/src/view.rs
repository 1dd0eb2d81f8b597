//! Derived-view pipeline: tab scope -> column filters -> stable sort.

use std::cmp::Ordering;

use driftdeck_types::ChangeRecord;

use crate::criteria::{SortColumn, SortDirection, Tab, ViewCriteria};
use crate::selection::SelectionSet;

/// Compute the ordered sequence of record indices visible under `criteria`.
///
/// Pure function of its inputs: never mutates `records` or `selection`, and
/// identical inputs always yield identical output. Indices are positions in
/// `records`, valid until the collection is replaced.
pub fn derive_view(
    records: &[ChangeRecord],
    selection: &SelectionSet,
    criteria: &ViewCriteria,
) -> Vec<usize> {
    let mut view: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| criteria.tab == Tab::All || selection.contains(&record.id))
        .filter(|(_, record)| criteria.filters.matches(record))
        .map(|(index, _)| index)
        .collect();

    // Vec::sort_by is stable, so ties keep their prior relative order and
    // repeated derivations are reproducible.
    view.sort_by(|&a, &b| {
        let ordering = compare_records(&records[a], &records[b], criteria.sort_column);
        match criteria.sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    view
}

fn compare_records(a: &ChangeRecord, b: &ChangeRecord, column: SortColumn) -> Ordering {
    match column {
        // None sorts below Some, which puts absent/unparseable timestamps
        // at the low end.
        SortColumn::ModifiedAt => a.modified_at_ts().cmp(&b.modified_at_ts()),
        SortColumn::Name => a.name.cmp(&b.name),
        SortColumn::Category => a.category.cmp(&b.category),
        SortColumn::ModifiedBy => a.modified_by.cmp(&b.modified_by),
    }
}
