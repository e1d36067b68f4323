//! Core types for psst.
//!
//! This module defines the two data structures shared across all layers:
//! the scraped [`IndexEntry`] and the session-scoped [`SearchIndex`]
//! snapshot it lives in.

use serde::{Deserialize, Serialize};

/// One searchable record scraped from a rendered post element.
///
/// `title` and `url` always come from the post's title link; a post without
/// one never becomes an entry. `summary` and `tags` degrade to empty when
/// the page omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Text content of the title link, whitespace-normalised.
    pub title: String,
    /// The title link's `href`, resolved against the configured site base
    /// URL (what `link.href` would read in a browser).
    pub url: String,
    /// Text content of the post's `.post-summary` element, or `""`.
    pub summary: String,
    /// Text content of every `.tag` element in the post, in document order.
    /// Case is preserved; matching lowercases at query time.
    pub tags: Vec<String>,
}

/// The immutable search index for one scanned page.
///
/// Built once at startup and passed by reference from then on. Entries keep
/// the document order of the post elements they were scraped from, and the
/// filter preserves that order, so a position into this vec identifies a
/// result for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    /// Wraps already-scraped entries. The scanner in [`crate::index`] is the
    /// usual constructor; this one exists for programmatic indexes.
    pub fn from_entries(entries: Vec<IndexEntry>) -> Self {
        Self { entries }
    }

    /// All entries in document order.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Entry at `pos`, if in range.
    pub fn get(&self, pos: usize) -> Option<&IndexEntry> {
        self.entries.get(pos)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
