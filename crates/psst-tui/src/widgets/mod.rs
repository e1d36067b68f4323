//! Ratatui widgets for the psst TUI.

pub mod header;
pub mod help;
pub mod post_list;
pub mod results_panel;
pub mod search_bar;
