//! Pure construction of the per-frame screen view model from app state.

use crate::app::{Focus, ReviewApp};

use super::view_models::{
    GridHeaderViewModel, PagerViewModel, ScreenViewModel, StatusViewModel, TabsViewModel,
};

pub fn build_screen(app: &ReviewApp) -> ScreenViewModel {
    let grid = app.grid();
    let criteria = grid.criteria();
    let page = grid.page();

    let tabs = TabsViewModel {
        tab: criteria.tab,
        all_count: grid.records().len(),
        selected_count: grid.selection_count(),
        source: app.source().to_string(),
    };

    let header = GridHeaderViewModel::build(
        grid.header_checkbox(),
        criteria.sort_column,
        criteria.sort_direction,
    );

    let pager = PagerViewModel {
        effective_page: page.effective_page,
        total_pages: page.total_pages,
        page_size: grid.page_size(),
        item_count: grid.view_len(),
        has_prev: !page.is_first(),
        has_next: !page.is_last(),
    };

    let editing_hint = match app.focus() {
        Focus::Grid => None,
        Focus::NameFilter => Some("editing name filter".to_string()),
        Focus::ModifiedByFilter => Some("editing author filter".to_string()),
    };

    let status = StatusViewModel {
        filter_name: criteria.filters.name.clone(),
        filter_modified_by: criteria.filters.modified_by.clone(),
        filter_category: criteria.filters.category.clone(),
        editing_hint,
        busy: app.busy_text(),
    };

    ScreenViewModel {
        tabs,
        header,
        pager,
        status,
        banner: app.banner_view(),
        compose: app.compose_view(),
    }
}
