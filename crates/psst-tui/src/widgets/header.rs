//! Header widget — the 1-line status strip at the top of the screen.
//!
//! Left: app name, the scanned page, and how many posts were indexed.
//! Right: keybinding hints, right-aligned in the same row.

use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

pub struct Header<'a> {
    page_label: &'a str,
    entry_count: usize,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(page_label: &'a str, entry_count: usize, theme: &'a Theme) -> Self {
        Self {
            page_label,
            entry_count,
            theme,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let posts = if self.entry_count == 1 { "post" } else { "posts" };
        let status = format!(
            " psst · {} · {} {} ",
            self.page_label, self.entry_count, posts
        );
        buf.set_string(area.x, area.y, &status, self.theme.header_status);

        // Keybinding hints at the right edge
        let hint = " Enter:open  Esc:dismiss/quit  F1:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        if hint_x > area.x + status.chars().count() as u16 {
            buf.set_string(hint_x, area.y, hint, self.theme.header_hints);
        }
    }
}
