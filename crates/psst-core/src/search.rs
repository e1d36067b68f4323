//! The query filter.
//!
//! Plain case-insensitive substring matching over title, summary and tags,
//! capped at [`MAX_RESULTS`] hits in index order. No ranking, no fuzz: the
//! first five posts that contain the query are the answer.

use crate::types::{IndexEntry, SearchIndex};

/// Most results a query returns; the panel never shows more rows than this.
pub const MAX_RESULTS: usize = 5;

/// Queries shorter than this after trimming are not queries. Callers clear
/// and hide the panel instead of filtering (see [`crate::panel`]).
pub const MIN_QUERY_LEN: usize = 2;

/// Filters the index. Matching is case-insensitive on both sides; an entry
/// hits when its title, its summary, or any of its tags contains the query
/// as a substring. Results keep index order.
///
/// This is a pure function of `(index, query)`. Short-query gating is the
/// caller's responsibility, not the filter's.
pub fn search<'a>(index: &'a SearchIndex, query: &str) -> Vec<&'a IndexEntry> {
    let query = query.to_lowercase();
    index
        .entries()
        .iter()
        .filter(|entry| entry_matches(entry, &query))
        .take(MAX_RESULTS)
        .collect()
}

/// Same filter, but yielding positions into the index. This is what the
/// panel stores: positions stay valid for the whole session because the
/// index is immutable.
pub fn matching_positions(index: &SearchIndex, query: &str) -> Vec<usize> {
    let query = query.to_lowercase();
    index
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry_matches(entry, &query))
        .map(|(pos, _)| pos)
        .take(MAX_RESULTS)
        .collect()
}

/// `query` must already be lowercased.
fn entry_matches(entry: &IndexEntry, query: &str) -> bool {
    entry.title.to_lowercase().contains(query)
        || entry.summary.to_lowercase().contains(query)
        || entry.tags.iter().any(|tag| tag.to_lowercase().contains(query))
}
