//! Review controller: owns the grid state and decides, for every key and
//! every inbound host message, what to recompute and how much to redraw.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use driftdeck_engine::{
    prepare_submission, GridState, HeaderCheckbox, RenderPlan, SortColumn, SubmitAction, Tab,
    PAGE_SIZES,
};
use driftdeck_runtime::{BridgeHandle, RequestKind, RequestTracker, SnapshotWriter};
use driftdeck_types::{new_request_id, InboundMessage, OutboundMessage};
use tracing::{debug, info, warn};

use crate::presentation::row_cache::RowCache;
use crate::presentation::view_models::{
    BannerKind, BannerViewModel, ComposeField, ComposeViewModel,
};

/// How long a success banner stays up before the tick expires it
const BANNER_TTL: Duration = Duration::from_secs(5);

/// Which part of the screen consumes plain keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Grid,
    NameFilter,
    ModifiedByFilter,
}

#[derive(Debug)]
struct Banner {
    kind: BannerKind,
    text: String,
    raised_at: Instant,
}

#[derive(Debug, Default)]
struct ComposeDraft {
    message: String,
    ticket: String,
    field_on_ticket: bool,
}

pub struct ReviewApp {
    grid: GridState,
    rows: RowCache,
    cursor: usize,
    focus: Focus,
    compose_open: bool,
    draft: ComposeDraft,
    banner: Option<Banner>,
    progress: Option<String>,
    tracker: RequestTracker,
    bridge: BridgeHandle,
    writer: Option<SnapshotWriter>,
    source: String,
    categories: Vec<String>,
    should_quit: bool,
}

impl ReviewApp {
    pub fn new(
        bridge: BridgeHandle,
        grid: GridState,
        source: String,
        writer: Option<SnapshotWriter>,
    ) -> Self {
        let mut rows = RowCache::new();
        rows.rebuild(&grid);
        let categories = distinct_categories(&grid);

        Self {
            grid,
            rows,
            cursor: 0,
            focus: Focus::Grid,
            compose_open: false,
            draft: ComposeDraft::default(),
            banner: None,
            progress: None,
            tracker: RequestTracker::new(),
            bridge,
            writer,
            source,
            categories,
            should_quit: false,
        }
    }

    // --- Host boundary --------------------------------------------------

    /// Fire-and-forget fetch. Retrying after a failure re-sends the same
    /// request payload under a fresh correlation id.
    pub fn request_fetch(&mut self) {
        let request_id = new_request_id();
        self.tracker.track(request_id.clone(), RequestKind::Fetch);
        self.bridge.send(OutboundMessage::FetchRecords {
            request_id,
            source: Some(self.source.clone()),
            categories: Vec::new(),
        });
    }

    /// Apply every queued inbound message
    pub fn drain_bridge(&mut self) {
        for message in self.bridge.drain() {
            self.on_inbound(message);
        }
    }

    pub fn on_inbound(&mut self, message: InboundMessage) {
        match message {
            InboundMessage::RecordsLoaded {
                request_id,
                records,
            } => {
                self.tracker.finish(request_id.as_deref());
                // Last response wins: an unmatched collection still
                // replaces state and ends the loading indicator.
                self.tracker.clear_kind(RequestKind::Fetch);
                let plan = self.grid.replace_records(records);
                self.apply(plan);
                self.cursor = 0;
                self.categories = distinct_categories(&self.grid);
                self.touch();
            }
            InboundMessage::SourcesLoaded { sources, .. } => {
                debug!(count = sources.len(), "source list received during review");
            }
            InboundMessage::CommitProgress { step, detail, .. } => {
                self.progress = Some(match detail {
                    Some(detail) => format!("{}: {}", step, detail),
                    None => step,
                });
            }
            InboundMessage::CommitCompleted {
                request_id,
                success,
                cancelled,
                summary,
            } => {
                self.tracker.finish(request_id.as_deref());
                self.tracker.clear_kind(RequestKind::Commit);
                self.progress = None;

                if cancelled {
                    // Declined confirmation is not an error; controls come
                    // back with no banner.
                    debug!("large submission cancelled by the user");
                } else if success {
                    let text = match summary {
                        Some(summary) => format!(
                            "committed {} files to {} ({})",
                            summary.files_committed, summary.branch, summary.revision
                        ),
                        None => "commit completed".to_string(),
                    };
                    info!("{}", text);
                    self.raise_banner(BannerKind::Success, text);
                    let plan = self.grid.commit_succeeded();
                    self.apply(plan);
                    self.draft = ComposeDraft::default();
                    self.touch();
                    self.request_fetch();
                } else {
                    self.raise_banner(BannerKind::Error, "commit failed".to_string());
                }
            }
            InboundMessage::HostError {
                request_id,
                message,
                detail,
            } => {
                if let Some(detail) = detail {
                    warn!(detail = %detail, "host error detail");
                }
                match self.tracker.finish(request_id.as_deref()) {
                    Some(kind) => self.tracker.clear_kind(kind),
                    None => {
                        // Uncorrelated failure: re-enable everything.
                        self.tracker.clear_kind(RequestKind::Fetch);
                        self.tracker.clear_kind(RequestKind::Commit);
                    }
                }
                self.progress = None;
                self.raise_banner(BannerKind::Error, message);
            }
        }
    }

    // --- Input ----------------------------------------------------------

    pub fn on_key(&mut self, key: KeyEvent) {
        if self.compose_open {
            self.on_compose_key(key);
            return;
        }
        match self.focus {
            Focus::Grid => self.on_grid_key(key),
            Focus::NameFilter | Focus::ModifiedByFilter => self.on_filter_key(key),
        }
    }

    fn on_grid_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('x') => self.banner = None,
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.rows.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(plan) = self.grid.prev_page() {
                    self.apply(plan);
                    self.cursor = 0;
                    self.touch();
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(plan) = self.grid.next_page() {
                    self.apply(plan);
                    self.cursor = 0;
                    self.touch();
                }
            }
            KeyCode::Char(' ') => self.toggle_cursor_row(),
            KeyCode::Char('a') => {
                let select = self.grid.header_checkbox() != HeaderCheckbox::Checked;
                let plan = self.grid.set_all_visible(select);
                self.apply(plan);
                self.touch();
            }
            KeyCode::Char('t') | KeyCode::Tab => {
                let tab = match self.grid.criteria().tab {
                    Tab::All => Tab::Selected,
                    Tab::Selected => Tab::All,
                };
                let plan = self.grid.set_tab(tab);
                self.apply(plan);
                self.cursor = 0;
                self.touch();
            }
            KeyCode::Char('1') => self.sort(SortColumn::Name),
            KeyCode::Char('2') => self.sort(SortColumn::Category),
            KeyCode::Char('3') => self.sort(SortColumn::ModifiedBy),
            KeyCode::Char('4') => self.sort(SortColumn::ModifiedAt),
            KeyCode::Char('z') => self.cycle_page_size(),
            KeyCode::Char('/') => self.focus = Focus::NameFilter,
            KeyCode::Char('b') => self.focus = Focus::ModifiedByFilter,
            KeyCode::Char('g') => self.cycle_category(),
            KeyCode::Char('c') => {
                if !self.is_committing() {
                    self.compose_open = true;
                }
            }
            KeyCode::Char('r') => self.request_fetch(),
            _ => {}
        }
    }

    fn on_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.focus = Focus::Grid,
            KeyCode::Backspace => self.edit_focused_filter(|value| {
                value.pop();
            }),
            KeyCode::Char(c) => self.edit_focused_filter(|value| value.push(c)),
            _ => {}
        }
    }

    fn edit_focused_filter(&mut self, edit: impl FnOnce(&mut String)) {
        let plan = match self.focus {
            Focus::NameFilter => {
                let mut value = self.grid.criteria().filters.name.clone();
                edit(&mut value);
                self.grid.set_name_filter(value)
            }
            Focus::ModifiedByFilter => {
                let mut value = self.grid.criteria().filters.modified_by.clone();
                edit(&mut value);
                self.grid.set_modified_by_filter(value)
            }
            Focus::Grid => return,
        };
        self.apply(plan);
        self.cursor = 0;
        self.touch();
    }

    fn on_compose_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.compose_open = false,
            KeyCode::Tab => self.draft.field_on_ticket = !self.draft.field_on_ticket,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.active_draft_field().pop();
            }
            KeyCode::Char(c) => self.active_draft_field().push(c),
            _ => {}
        }
    }

    fn active_draft_field(&mut self) -> &mut String {
        if self.draft.field_on_ticket {
            &mut self.draft.ticket
        } else {
            &mut self.draft.message
        }
    }

    // --- Gestures -------------------------------------------------------

    fn toggle_cursor_row(&mut self) {
        let Some(row) = self.rows.rows().get(self.cursor) else {
            return;
        };
        let id = row.id.clone();
        let plan = self.grid.toggle_row(id);
        self.apply(plan);
        self.touch();
    }

    fn sort(&mut self, column: SortColumn) {
        let plan = self.grid.toggle_sort(column);
        self.apply(plan);
        self.touch();
    }

    fn cycle_page_size(&mut self) {
        let current = self.grid.page_size();
        let position = PAGE_SIZES.iter().position(|&size| size == current);
        let next = match position {
            Some(index) => PAGE_SIZES[(index + 1) % PAGE_SIZES.len()],
            None => PAGE_SIZES[0],
        };
        let plan = self.grid.set_page_size(next);
        self.apply(plan);
        self.cursor = 0;
        self.touch();
    }

    fn cycle_category(&mut self) {
        let next = match &self.grid.criteria().filters.category {
            None => self.categories.first().cloned(),
            Some(current) => self
                .categories
                .iter()
                .position(|category| category == current)
                .and_then(|index| self.categories.get(index + 1))
                .cloned(),
        };
        let plan = self.grid.set_category_filter(next);
        self.apply(plan);
        self.cursor = 0;
        self.touch();
    }

    fn submit(&mut self) {
        let result = prepare_submission(
            self.grid.selection(),
            &self.draft.message,
            &self.draft.ticket,
            &self.source,
        );
        match result {
            Err(err) => self.raise_banner(BannerKind::Error, err.to_string()),
            Ok(action) => {
                let request_id = new_request_id();
                self.tracker.track(request_id.clone(), RequestKind::Commit);
                let message = match action {
                    SubmitAction::Commit(payload) => OutboundMessage::SubmitCommit {
                        request_id,
                        payload,
                    },
                    SubmitAction::Confirm {
                        payload,
                        item_count,
                    } => OutboundMessage::ConfirmCommit {
                        request_id,
                        payload,
                        item_count,
                    },
                };
                self.bridge.send(message);
                self.progress = Some("Submitting selection".to_string());
                self.compose_open = false;
            }
        }
    }

    // --- Lifecycle ------------------------------------------------------

    /// Periodic housekeeping from the event loop
    pub fn tick(&mut self) {
        let expired = matches!(
            &self.banner,
            Some(banner)
                if banner.kind == BannerKind::Success && banner.raised_at.elapsed() >= BANNER_TTL
        );
        if expired {
            self.banner = None;
        }
    }

    fn apply(&mut self, plan: RenderPlan) {
        self.rows.apply(&plan, &self.grid);
        self.cursor = if self.rows.is_empty() {
            0
        } else {
            self.cursor.min(self.rows.len() - 1)
        };
    }

    /// Schedule a debounced snapshot of the current state
    fn touch(&self) {
        if let Some(writer) = &self.writer {
            writer.schedule(self.grid.capture());
        }
    }

    fn raise_banner(&mut self, kind: BannerKind, text: String) {
        self.banner = Some(Banner {
            kind,
            text,
            raised_at: Instant::now(),
        });
    }

    // --- Readouts for the presenter --------------------------------------

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn rows(&self) -> &RowCache {
        &self.rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_fetching(&self) -> bool {
        self.tracker.is_pending(RequestKind::Fetch)
    }

    pub fn is_committing(&self) -> bool {
        self.tracker.is_pending(RequestKind::Commit)
    }

    pub fn busy_text(&self) -> Option<String> {
        if let Some(progress) = &self.progress {
            return Some(progress.clone());
        }
        if self.is_fetching() {
            return Some("Loading records".to_string());
        }
        None
    }

    pub fn banner_view(&self) -> Option<BannerViewModel> {
        self.banner.as_ref().map(|banner| BannerViewModel {
            kind: banner.kind,
            text: banner.text.clone(),
        })
    }

    pub fn compose_view(&self) -> Option<ComposeViewModel> {
        if !self.compose_open {
            return None;
        }
        Some(ComposeViewModel {
            message: self.draft.message.clone(),
            ticket: self.draft.ticket.clone(),
            field: if self.draft.field_on_ticket {
                ComposeField::Ticket
            } else {
                ComposeField::Message
            },
            item_count: self.grid.selection_count(),
        })
    }
}

fn distinct_categories(grid: &GridState) -> Vec<String> {
    let mut categories: Vec<String> = grid
        .records()
        .iter()
        .map(|record| record.category.clone())
        .collect();
    categories.sort();
    categories.dedup();
    categories
}
