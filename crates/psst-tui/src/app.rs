//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Every input event is
//! handled to completion before the next is read: an edit re-runs the filter
//! and the next draw shows the new dropdown, the same keystroke-to-render
//! chain the in-page script performs.
//!
//! Click hit-testing works off the widget areas cached at draw time, so a
//! click lands on whatever was actually on screen when it happened.

use crate::{
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        header::Header,
        help::HelpPopup,
        post_list::PostList,
        results_panel::ResultsPanel,
        search_bar::{SearchBar, SearchBarState},
    },
};
use crossterm::{
    event::{self as ct_event, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use psst_core::{config::Config, Panel, SearchIndex};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{cell::Cell, io, time::Duration};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    /// The session snapshot; built once by `main`, never mutated.
    pub index: SearchIndex,
    /// What the header calls the scanned page.
    pub page_label: String,
    pub search: SearchBarState,
    pub panel: Panel,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub quit: bool,
    /// URL of the result the user opened, printed by `main` after exit.
    pub selected_url: Option<String>,

    /// Cached from the last draw so clicks hit-test against what was on
    /// screen.
    search_area: Cell<Rect>,
    panel_area: Cell<Rect>,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(index: SearchIndex, page_label: String, config: Config) -> Self {
        let theme = Theme::by_name(&config.ui.theme);
        App {
            state: AppState {
                index,
                page_label,
                search: SearchBarState::default(),
                panel: Panel::new(),
                theme,
                config,
                show_help: false,
                quit: false,
                selected_url: None,
                search_area: Cell::new(Rect::ZERO),
                panel_area: Cell::new(Rect::ZERO),
            },
        }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on
    /// exit. Returns the URL of the result the user opened, if any.
    pub fn run(mut self) -> anyhow::Result<Option<String>> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result.map(|()| self.state.selected_url)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind != crossterm::event::KeyEventKind::Press => {}
                    raw => {
                        if let Some(ev) = event::to_app_event(raw) {
                            tracing::debug!(event = ?ev, "input event");
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::HelpToggle | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::HelpToggle => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            // Escape dismisses the dropdown first, then quits.
            AppEvent::Escape => {
                if s.panel.is_active() {
                    tracing::debug!("panel: Active -> Hidden (escape)");
                    s.panel.dismiss();
                } else {
                    s.quit = true;
                }
            }

            // Up/Down move the highlight — the hover analog.
            AppEvent::Nav(Direction::Up) => s.panel.select_prev(),
            AppEvent::Nav(Direction::Down) => s.panel.select_next(),

            // Enter opens the highlighted result.
            AppEvent::Enter => {
                if let Some(entry) = s.panel.selected_entry(&s.index) {
                    tracing::debug!(url = %entry.url, "result opened");
                    s.selected_url = Some(entry.url.clone());
                    s.quit = true;
                }
            }

            AppEvent::Click(column, row) => handle_click(s, column, row),

            // Everything else is query editing; re-filter when the text
            // changed.
            other => {
                if s.search.handle(&other) {
                    s.panel.on_query(&s.index, &s.search.query);
                    tracing::debug!(
                        query = %s.search.query,
                        active = s.panel.is_active(),
                        results = s.panel.results().len(),
                        "panel re-queried"
                    );
                }
            }
        }
    }
}

/// Route a click: a result row opens that result, the search bar is inert,
/// anywhere else dismisses an active dropdown (the click-outside rule).
fn handle_click(s: &mut AppState, column: u16, row: u16) {
    let panel_area = s.panel_area.get();
    if s.panel.is_active() && panel_area.contains((column, row).into()) {
        // Rows inside the border; title and summary rows both count.
        let inner_row = row.saturating_sub(panel_area.y + 1) as usize;
        if let Some(result_row) = ResultsPanel::result_row_at(&s.panel, inner_row) {
            s.panel.select_row(result_row);
            if let Some(entry) = s.panel.selected_entry(&s.index) {
                tracing::debug!(url = %entry.url, "result clicked");
                s.selected_url = Some(entry.url.clone());
                s.quit = true;
            }
        }
        return;
    }

    if s.search_area.get().contains((column, row).into()) {
        return;
    }

    if s.panel.is_active() {
        tracing::debug!("panel: Active -> Hidden (click outside)");
        s.panel.dismiss();
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line header | 3-line search bar | backdrop
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(area);

    frame.render_widget(
        Header::new(&state.page_label, state.index.len(), &state.theme),
        vert[0],
    );
    frame.render_widget(
        PostList::new(&state.index, &state.theme, state.config.ui.show_tags),
        vert[2],
    );

    let search_bar = SearchBar::new(&state.search, &state.theme);
    let cursor = search_bar.cursor_position(vert[1]);
    frame.render_widget(search_bar, vert[1]);
    state.search_area.set(vert[1]);

    // The dropdown overlays the backdrop just below the search bar.
    if state.panel.is_active() {
        let height = ResultsPanel::height(&state.panel).min(vert[2].height);
        let panel_area = Rect {
            height,
            ..vert[2]
        };
        frame.render_widget(
            ResultsPanel::new(&state.panel, &state.index, &state.theme),
            panel_area,
        );
        state.panel_area.set(panel_area);
    } else {
        state.panel_area.set(Rect::ZERO);
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
        return;
    }

    frame.set_cursor_position(cursor);
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use psst_core::IndexEntry;

    fn entry(title: &str, url: &str) -> IndexEntry {
        IndexEntry {
            title: title.to_string(),
            url: url.to_string(),
            summary: "A post.".to_string(),
            tags: vec!["rust".to_string()],
        }
    }

    fn app_with(entries: Vec<IndexEntry>) -> App {
        App::new(
            SearchIndex::from_entries(entries),
            "index.html".to_string(),
            Config::defaults(),
        )
    }

    fn type_query(app: &mut App, query: &str) {
        for c in query.chars() {
            app.handle(AppEvent::Char(c));
        }
    }

    #[test]
    fn typing_two_chars_activates_the_panel() {
        let mut app = app_with(vec![entry("Intro to Rust", "/posts/rust/")]);
        app.handle(AppEvent::Char('r'));
        assert!(!app.state.panel.is_active());
        app.handle(AppEvent::Char('u'));
        assert!(app.state.panel.is_active());
        assert_eq!(app.state.panel.results(), &[0]);
    }

    #[test]
    fn backspacing_below_min_length_hides_the_panel() {
        let mut app = app_with(vec![entry("Intro to Rust", "/posts/rust/")]);
        type_query(&mut app, "ru");
        assert!(app.state.panel.is_active());
        app.handle(AppEvent::Backspace);
        assert!(!app.state.panel.is_active());
        assert!(app.state.panel.results().is_empty());
    }

    #[test]
    fn escape_dismisses_then_quits() {
        let mut app = app_with(vec![entry("Intro to Rust", "/posts/rust/")]);
        type_query(&mut app, "rust");
        app.handle(AppEvent::Escape);
        assert!(!app.state.panel.is_active());
        assert!(!app.state.quit);
        app.handle(AppEvent::Escape);
        assert!(app.state.quit);
    }

    #[test]
    fn enter_records_the_highlighted_url_and_quits() {
        let mut app = app_with(vec![
            entry("Intro to Rust", "/posts/rust/"),
            entry("Rust and Systems", "/posts/systems/"),
        ]);
        type_query(&mut app, "rust");
        app.handle(AppEvent::Nav(Direction::Down));
        app.handle(AppEvent::Enter);
        assert_eq!(app.state.selected_url.as_deref(), Some("/posts/systems/"));
        assert!(app.state.quit);
    }

    #[test]
    fn enter_with_no_results_does_nothing() {
        let mut app = app_with(vec![entry("Intro to Rust", "/posts/rust/")]);
        type_query(&mut app, "zzzz");
        assert!(app.state.panel.is_active());
        app.handle(AppEvent::Enter);
        assert!(app.state.selected_url.is_none());
        assert!(!app.state.quit);
    }

    #[test]
    fn click_outside_both_widgets_dismisses_the_panel() {
        let mut app = app_with(vec![entry("Intro to Rust", "/posts/rust/")]);
        type_query(&mut app, "rust");
        app.state.search_area.set(Rect::new(0, 1, 80, 3));
        app.state.panel_area.set(Rect::new(0, 4, 80, 4));
        app.handle(AppEvent::Click(10, 20));
        assert!(!app.state.panel.is_active());
    }

    #[test]
    fn click_in_the_search_bar_keeps_the_panel_active() {
        let mut app = app_with(vec![entry("Intro to Rust", "/posts/rust/")]);
        type_query(&mut app, "rust");
        app.state.search_area.set(Rect::new(0, 1, 80, 3));
        app.state.panel_area.set(Rect::new(0, 4, 80, 4));
        app.handle(AppEvent::Click(10, 2));
        assert!(app.state.panel.is_active());
    }

    #[test]
    fn click_on_a_result_row_opens_it() {
        let mut app = app_with(vec![
            entry("Intro to Rust", "/posts/rust/"),
            entry("Rust and Systems", "/posts/systems/"),
        ]);
        type_query(&mut app, "rust");
        app.state.search_area.set(Rect::new(0, 1, 80, 3));
        // Border row at y=4; result 0 on rows 5-6, result 1 on rows 7-8.
        app.state.panel_area.set(Rect::new(0, 4, 80, 6));
        app.handle(AppEvent::Click(10, 7));
        assert_eq!(app.state.selected_url.as_deref(), Some("/posts/systems/"));
        assert!(app.state.quit);
    }

    #[test]
    fn click_on_the_placeholder_row_opens_nothing() {
        let mut app = app_with(vec![entry("Intro to Rust", "/posts/rust/")]);
        type_query(&mut app, "zzzz");
        app.state.panel_area.set(Rect::new(0, 4, 80, 3));
        app.handle(AppEvent::Click(10, 5));
        assert!(app.state.selected_url.is_none());
        assert!(!app.state.quit);
    }

    #[test]
    fn help_intercepts_typing_until_closed() {
        let mut app = app_with(vec![entry("Intro to Rust", "/posts/rust/")]);
        app.handle(AppEvent::HelpToggle);
        type_query(&mut app, "ru");
        assert_eq!(app.state.search.query, "");
        assert!(!app.state.panel.is_active());
        app.handle(AppEvent::HelpToggle);
        assert!(!app.state.show_help);
        type_query(&mut app, "ru");
        assert!(app.state.panel.is_active());
    }
}
