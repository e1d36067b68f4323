//! Post list widget — the dim backdrop "page" behind the search dropdown.
//!
//! Lists every indexed post (title plus tag chips) the way the scanned page
//! would show them under the search box. It is not interactive: search
//! happens in the bar, results in the dropdown. When the list is taller
//! than the pane, the tail collapses into an `… N more posts` line.

use crate::theme::Theme;
use psst_core::SearchIndex;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

pub struct PostList<'a> {
    index: &'a SearchIndex,
    theme: &'a Theme,
    show_tags: bool,
}

impl<'a> PostList<'a> {
    pub fn new(index: &'a SearchIndex, theme: &'a Theme, show_tags: bool) -> Self {
        Self {
            index,
            theme,
            show_tags,
        }
    }

    fn post_line(&self, pos: usize) -> Line<'a> {
        let entry = &self.index.entries()[pos];
        let mut spans = vec![Span::styled(entry.title.as_str(), self.theme.post_title)];
        if self.show_tags {
            for tag in &entry.tags {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!("#{tag}"),
                    self.theme.tag_style(tag),
                ));
            }
        }
        Line::from(spans)
    }
}

impl Widget for PostList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Posts")
            .border_style(self.theme.border_backdrop);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = inner.height as usize;
        if rows == 0 {
            return;
        }

        let total = self.index.len();
        let shown = if total <= rows { total } else { rows - 1 };

        let mut lines: Vec<Line<'_>> = (0..shown).map(|pos| self.post_line(pos)).collect();
        if shown < total {
            lines.push(Line::from(Span::styled(
                format!("… {} more posts", total - shown),
                self.theme.post_overflow,
            )));
        }
        Paragraph::new(lines).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use psst_core::IndexEntry;

    fn index_of(n: usize) -> SearchIndex {
        SearchIndex::from_entries(
            (0..n)
                .map(|i| IndexEntry {
                    title: format!("Post {i}"),
                    url: format!("/posts/{i}/"),
                    summary: String::new(),
                    tags: vec!["rust".to_string()],
                })
                .collect(),
        )
    }

    fn rendered_text(widget: PostList<'_>, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn short_list_shows_every_post() {
        let index = index_of(3);
        let theme = Theme::load_default();
        let text = rendered_text(PostList::new(&index, &theme, true), 40, 10);
        assert!(text.contains("Post 0"));
        assert!(text.contains("Post 2"));
        assert!(text.contains("#rust"));
        assert!(!text.contains("more posts"));
    }

    #[test]
    fn long_list_collapses_into_overflow_line() {
        let index = index_of(20);
        let theme = Theme::load_default();
        // 6 inner rows: 5 posts + the overflow line.
        let text = rendered_text(PostList::new(&index, &theme, false), 40, 8);
        assert!(text.contains("Post 4"));
        assert!(!text.contains("Post 5"));
        assert!(text.contains("15 more posts"));
    }

    #[test]
    fn tags_can_be_hidden() {
        let index = index_of(1);
        let theme = Theme::load_default();
        let text = rendered_text(PostList::new(&index, &theme, false), 40, 5);
        assert!(!text.contains("#rust"));
    }
}
