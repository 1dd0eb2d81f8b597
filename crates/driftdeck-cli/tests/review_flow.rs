//! Controller-level flows: fetch, select, submit, and the boundary
//! failure modes, driven through a scripted host connector on a real
//! bridge thread.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use driftdeck::app::ReviewApp;
use driftdeck::presentation::view_models::BannerKind;
use driftdeck_engine::GridState;
use driftdeck_runtime::spawn_connector;
use driftdeck_testing::{record_at, ScriptedHost};

fn app_with(host: ScriptedHost) -> ReviewApp {
    let bridge = spawn_connector(host);
    ReviewApp::new(bridge, GridState::new(), "prod".to_string(), None)
}

fn pump_until(app: &mut ReviewApp, what: &str, mut done: impl FnMut(&ReviewApp) -> bool) {
    for _ in 0..200 {
        app.drain_bridge();
        if done(app) {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("timed out waiting for: {}", what);
}

fn press(app: &mut ReviewApp, code: KeyCode) {
    app.on_key(KeyEvent::from(code));
}

fn type_str(app: &mut ReviewApp, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn loaded_app() -> ReviewApp {
    let mut app = app_with(ScriptedHost::with_sample_data());
    app.request_fetch();
    pump_until(&mut app, "records to load", |app| {
        !app.grid().records().is_empty()
    });
    app
}

#[test]
fn fetch_populates_the_grid_newest_first() {
    let app = loaded_app();

    assert_eq!(app.grid().records().len(), 8);
    assert!(!app.is_fetching());

    // Newest parseable timestamp first; the unparseable and absent ones
    // sort to the bottom in their original order.
    let ids: Vec<&str> = app.rows().rows().iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids.first(), Some(&"rec-06"));
    assert_eq!(&ids[6..], ["rec-07", "rec-08"]);
}

#[test]
fn toggle_then_commit_clears_selection() {
    let mut app = loaded_app();

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.grid().selection_count(), 1);

    press(&mut app, KeyCode::Char('c'));
    type_str(&mut app, "Fix layout");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "US-123");
    press(&mut app, KeyCode::Enter);

    pump_until(&mut app, "commit to complete", |app| {
        matches!(app.banner_view(), Some(banner) if banner.kind == BannerKind::Success)
    });

    assert_eq!(app.grid().selection_count(), 0);
    assert!(!app.is_committing());

    // The post-commit refresh lands on its own.
    pump_until(&mut app, "refreshed records", |app| !app.is_fetching());
    assert_eq!(app.grid().records().len(), 8);
}

#[test]
fn empty_message_is_rejected_before_the_boundary() {
    let mut app = loaded_app();

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Enter);

    let banner = app.banner_view().expect("validation banner");
    assert_eq!(banner.kind, BannerKind::Error);
    assert!(banner.text.contains("message"));
    assert!(!app.is_committing());
}

#[test]
fn declined_confirmation_restores_controls_silently() {
    let records = (0..60)
        .map(|i| {
            record_at(
                &format!("rec-{:02}", i),
                &format!("Component{}", i),
                "Layout",
                "Bob",
                "2026-01-01T10:00:00Z",
            )
        })
        .collect();
    let mut app = app_with(ScriptedHost::with_records(records).declining_confirmations());
    app.request_fetch();
    pump_until(&mut app, "records to load", |app| {
        !app.grid().records().is_empty()
    });

    // Grow the page so every record is visible, then select them all.
    press(&mut app, KeyCode::Char('z'));
    press(&mut app, KeyCode::Char('z'));
    assert_eq!(app.grid().page_size(), 100);
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.grid().selection_count(), 60);

    press(&mut app, KeyCode::Char('c'));
    type_str(&mut app, "Bulk sync");
    press(&mut app, KeyCode::Enter);

    pump_until(&mut app, "confirmation round-trip", |app| !app.is_committing());

    // Non-error cancellation: no banner, selection intact, retry possible.
    assert!(app.banner_view().is_none());
    assert_eq!(app.grid().selection_count(), 60);
}

#[test]
fn failed_commit_keeps_selection_for_retry() {
    let mut app = app_with(ScriptedHost::with_sample_data().failing_commits("pipeline rejected the commit"));
    app.request_fetch();
    pump_until(&mut app, "records to load", |app| {
        !app.grid().records().is_empty()
    });

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('c'));
    type_str(&mut app, "Fix layout");
    press(&mut app, KeyCode::Enter);

    pump_until(&mut app, "boundary error", |app| {
        matches!(app.banner_view(), Some(banner) if banner.kind == BannerKind::Error)
    });

    let banner = app.banner_view().unwrap();
    assert_eq!(banner.text, "pipeline rejected the commit");
    assert_eq!(app.grid().selection_count(), 1);
    assert!(!app.is_committing());
}

#[test]
fn late_record_load_wins_over_local_state() {
    let mut app = loaded_app();

    // The user keeps working while a second fetch is in flight.
    press(&mut app, KeyCode::Char('t'));
    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "account");
    press(&mut app, KeyCode::Esc);

    app.request_fetch();
    pump_until(&mut app, "late response", |app| !app.is_fetching());

    // The replacement collection landed regardless of the active view;
    // criteria themselves are untouched.
    assert_eq!(app.grid().records().len(), 8);
    assert_eq!(app.grid().criteria().filters.name, "account");
}
