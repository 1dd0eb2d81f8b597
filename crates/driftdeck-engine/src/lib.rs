//! In-memory grid engine for the driftdeck review surface.
//!
//! The engine is pure state management: a record collection, a selection
//! set, view criteria, and pagination, with a derived-view pipeline
//! (scope -> filter -> sort) recomputed on demand. Nothing in this crate
//! touches a terminal; renderers consume read-only snapshots and the
//! [`RenderPlan`] returned by each state transition.

pub mod criteria;
pub mod grid;
pub mod pager;
pub mod selection;
pub mod snapshot;
pub mod submit;
pub mod view;

pub use criteria::{ColumnFilters, SortColumn, SortDirection, Tab, ViewCriteria};
pub use grid::{GridState, RenderPlan};
pub use pager::{slice_page, PageSlice, DEFAULT_PAGE_SIZE, PAGE_SIZES};
pub use selection::{HeaderCheckbox, SelectionSet};
pub use snapshot::SessionSnapshot;
pub use submit::{
    compose_commit_message, prepare_submission, SubmitAction, SubmitError, CONFIRM_THRESHOLD,
};
pub use view::derive_view;
