//! Help popup — centred floating overlay listing all keybindings.
//!
//! Toggle with `F1`; close with `F1` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub struct HelpPopup<'a> {
    _theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { _theme: theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(56, 14, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" psst — keybindings (F1 to close) ")
            .border_style(Style::default().add_modifier(Modifier::BOLD));

        let inner = block.inner(popup);
        block.render(popup, buf);

        const BINDINGS: &[(&str, &str)] = &[
            ("type", "Edit the query; the dropdown follows"),
            ("←  /  →", "Move the query cursor"),
            ("↑  /  ↓  / wheel", "Move the result highlight"),
            ("Enter", "Open the highlighted result (prints its URL)"),
            ("click result", "Open that result"),
            ("click outside", "Dismiss the dropdown"),
            ("Escape", "Dismiss the dropdown, then quit"),
            ("Ctrl+c", "Quit"),
            ("F1", "Toggle this help popup"),
        ];

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<18}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
