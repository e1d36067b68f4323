//! HTML fragment rendering.
//!
//! Reproduces the markup the search dropdown injects into a page: a
//! placeholder `<div>` when nothing matched, otherwise one anchor block per
//! result. Styling stays inline against the site's CSS custom properties
//! so the fragment drops into any page that defines them.

use crate::types::IndexEntry;
use quick_xml::escape::escape;

/// Summary display cut-off, in characters.
pub const SUMMARY_MAX_CHARS: usize = 100;

const PLACEHOLDER: &str =
    r#"<div style="padding: 1rem; color: var(--text-secondary);">No results found</div>"#;

const ANCHOR_STYLE: &str = "display: block; padding: 1rem; border-bottom: 1px solid \
                            var(--border-color); text-decoration: none; color: \
                            var(--text-primary); transition: background 0.3s;";
const TITLE_STYLE: &str = "font-weight: 600; margin-bottom: 0.25rem; color: var(--accent-cyan);";
const SUMMARY_STYLE: &str = "font-size: 0.875rem; color: var(--text-secondary);";

/// First [`SUMMARY_MAX_CHARS`] characters of the summary plus a trailing
/// `...`. The ellipsis is unconditional, short summaries included. The
/// terminal panel renders summaries through the same function, so the two
/// surfaces always agree.
pub fn truncate_summary(summary: &str) -> String {
    let mut out: String = summary.chars().take(SUMMARY_MAX_CHARS).collect();
    out.push_str("...");
    out
}

/// Renders results as the dropdown's inner HTML.
///
/// An empty slice renders the "No results found" placeholder; by the panel
/// rules that still counts as content and the panel showing it stays
/// active. Titles, URLs and summaries are entity-escaped on the way out.
pub fn render_fragment(results: &[&IndexEntry]) -> String {
    if results.is_empty() {
        return PLACEHOLDER.to_string();
    }
    let blocks: Vec<String> = results
        .iter()
        .map(|entry| {
            format!(
                "<a href=\"{url}\" style=\"{ANCHOR_STYLE}\">\n  \
                 <div style=\"{TITLE_STYLE}\">{title}</div>\n  \
                 <div style=\"{SUMMARY_STYLE}\">{summary}</div>\n</a>",
                url = escape(entry.url.as_str()),
                title = escape(entry.title.as_str()),
                summary = escape(truncate_summary(&entry.summary).as_str()),
            )
        })
        .collect();
    blocks.join("\n")
}
