//! Terminal lifecycle and the review event loop.
//!
//! The loop owns the terminal and the cursor's `TableState`; all grid
//! state lives in [`ReviewApp`]. Each iteration draws the current state,
//! polls for one key, and drains the host bridge, so a mutation and its
//! render always complete before the next input is processed.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    widgets::TableState,
    Frame, Terminal,
};

use crate::app::ReviewApp;
use crate::presentation::presenter::build_screen;
use crate::presentation::view_models::ScreenViewModel;
use crate::presentation::views::{
    BannerView, ComposeView, GridView, PagerBarView, StatusBarView, TabsView,
};

pub fn run_review(mut app: ReviewApp) -> Result<()> {
    enable_raw_mode().context("failed to enter raw mode; is this a terminal?")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter the alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to initialize the terminal")?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut ReviewApp,
) -> Result<()> {
    let mut table_state = TableState::default();

    loop {
        app.tick();
        app.drain_bridge();

        if app.rows().is_empty() {
            table_state.select(None);
        } else {
            table_state.select(Some(app.cursor()));
        }

        let screen = build_screen(app);
        terminal.draw(|frame| render(frame, app, &screen, &mut table_state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn render(
    frame: &mut Frame,
    app: &ReviewApp,
    screen: &ScreenViewModel,
    table_state: &mut TableState,
) {
    let area = frame.area();

    let banner_height = if screen.banner.is_some() { 1 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(1),             // Tabs
        Constraint::Length(banner_height), // Banner (when raised)
        Constraint::Min(5),                // Grid
        Constraint::Length(1),             // Pager
        Constraint::Length(2),             // Status
    ])
    .split(area);

    frame.render_widget(TabsView::new(&screen.tabs), chunks[0]);

    if let Some(banner) = &screen.banner {
        frame.render_widget(BannerView::new(banner), chunks[1]);
    }

    frame.render_stateful_widget(
        GridView::new(&screen.header, app.rows().rows()),
        chunks[2],
        table_state,
    );

    frame.render_widget(PagerBarView::new(&screen.pager), chunks[3]);
    frame.render_widget(StatusBarView::new(&screen.status), chunks[4]);

    if let Some(compose) = &screen.compose {
        frame.render_widget(ComposeView::new(compose), area);
    }
}
