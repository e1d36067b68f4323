//! Results panel widget — the dropdown that overlays the page below the
//! search bar while the panel is active.
//!
//! Each result occupies two rows: the title and the truncated summary
//! (the same 100-character truncation the HTML fragment uses, so the two
//! surfaces always agree). The highlighted result gets the theme's selected
//! background — the terminal analog of the page version's hover style. Zero
//! results render the single "No results found" placeholder row.
//!
//! The widget draws nothing about a hidden panel; the app shell only
//! renders it while [`Panel::is_active`] holds.

use crate::theme::Theme;
use psst_core::render::truncate_summary;
use psst_core::{Panel, SearchIndex};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

/// Rows per rendered result: title + summary.
const LINES_PER_RESULT: u16 = 2;

pub struct ResultsPanel<'a> {
    panel: &'a Panel,
    index: &'a SearchIndex,
    theme: &'a Theme,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(panel: &'a Panel, index: &'a SearchIndex, theme: &'a Theme) -> Self {
        Self { panel, index, theme }
    }

    /// Total height the dropdown wants, borders included. The caller clamps
    /// this to the space below the search bar.
    pub fn height(panel: &Panel) -> u16 {
        let content = if panel.results().is_empty() {
            1 // placeholder row
        } else {
            panel.results().len() as u16 * LINES_PER_RESULT
        };
        content + 2
    }

    /// Which result a click on `inner_row` (0-based, borders excluded) lands
    /// on. Both the title row and the summary row of a result count, the way
    /// the whole anchor block is clickable on the page. `None` for the
    /// placeholder row and for rows past the last result.
    pub fn result_row_at(panel: &Panel, inner_row: usize) -> Option<usize> {
        let row = inner_row / LINES_PER_RESULT as usize;
        if row < panel.results().len() {
            Some(row)
        } else {
            None
        }
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // The dropdown floats over the backdrop.
        Clear.render(area, buf);

        let block = Block::bordered()
            .title("Results")
            .border_style(self.theme.border_panel);
        let inner = block.inner(area);
        block.render(area, buf);

        let entries = self.panel.result_entries(self.index);
        if entries.is_empty() {
            let line = Line::from(Span::styled("No results found", self.theme.placeholder));
            Paragraph::new(line).render(inner, buf);
            return;
        }

        let selected = self.panel.selected_row();
        let mut lines: Vec<Line<'_>> = Vec::with_capacity(entries.len() * 2);
        for (row, entry) in entries.iter().enumerate() {
            let mut title = Line::from(Span::styled(
                entry.title.as_str(),
                self.theme.result_title,
            ));
            let mut summary = Line::from(Span::styled(
                format!("  {}", truncate_summary(&entry.summary)),
                self.theme.result_summary,
            ));
            if row == selected {
                title = title.patch_style(self.theme.result_selected);
                summary = summary.patch_style(self.theme.result_selected);
            }
            lines.push(title);
            lines.push(summary);
        }
        Paragraph::new(lines).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
