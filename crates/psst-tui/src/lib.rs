//! psst TUI — ratatui application shell.
//!
//! The terminal rendition of the in-page search panel: a search bar over a
//! dim listing of the scanned page's posts, with the results dropdown
//! overlaying the listing while a query is live.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

/// Scan nothing, own everything: build the app over an already-scanned
/// index and run it to completion. Returns the URL of the result the user
/// opened, if any.
pub fn run(
    index: psst_core::SearchIndex,
    page_label: String,
    config: psst_core::config::Config,
) -> anyhow::Result<Option<String>> {
    App::new(index, page_label, config).run()
}
