//! Test builders — ergonomic constructors for entries and indexes.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use psst_core::{IndexEntry, SearchIndex};

// ---------------------------------------------------------------------------
// IndexEntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`IndexEntry`] test fixtures.
///
/// # Example
///
/// ```rust
/// let entry = IndexEntryBuilder::new("Intro to Rust")
///     .url("/posts/intro-to-rust/")
///     .summary("Getting started with ownership.")
///     .tag("rust")
///     .tag("systems")
///     .build();
/// ```
pub struct IndexEntryBuilder {
    title: String,
    url: String,
    summary: String,
    tags: Vec<String>,
}

impl IndexEntryBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let url = format!(
            "/posts/{}/",
            title.to_lowercase().replace(|c: char| !c.is_alphanumeric(), "-")
        );
        Self {
            title,
            url,
            summary: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn build(self) -> IndexEntry {
        IndexEntry {
            title: self.title,
            url: self.url,
            summary: self.summary,
            tags: self.tags,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A minimal entry with a derived URL and no summary or tags.
pub fn entry(title: &str) -> IndexEntry {
    IndexEntryBuilder::new(title).build()
}

/// An index over entries with the given titles, in that order.
pub fn index_of_titles(titles: &[&str]) -> SearchIndex {
    SearchIndex::from_entries(titles.iter().map(|t| entry(t)).collect())
}

/// A small mixed corpus exercising titles, summaries, and tags.
pub fn blog_index() -> SearchIndex {
    SearchIndex::from_entries(vec![
        IndexEntryBuilder::new("Intro to Rust")
            .summary("Getting started with ownership and borrowing.")
            .tag("rust")
            .tag("systems")
            .build(),
        IndexEntryBuilder::new("Terminal Colours")
            .summary("From 8 colours to truecolor.")
            .tag("cyan")
            .tag("tui")
            .build(),
        IndexEntryBuilder::new("Static Sites in Anger")
            .summary("Why I moved the blog to a generator.")
            .tag("hugo")
            .tag("meta")
            .build(),
        IndexEntryBuilder::new("Parsing Without Tears")
            .summary("Lenient readers for messy markup.")
            .tag("rust")
            .tag("parsing")
            .build(),
        IndexEntryBuilder::new("Benchmark Theatre")
            .summary("Criterion, baselines, and honest graphs.")
            .tag("rust")
            .tag("perf")
            .build(),
    ])
}

/// An index of `n` entries that all match the query `"post"`.
pub fn uniform_index(n: usize) -> SearchIndex {
    SearchIndex::from_entries(
        (0..n)
            .map(|i| {
                IndexEntryBuilder::new(format!("Post {i}"))
                    .summary(format!("Body of post number {i}."))
                    .tag("post")
                    .build()
            })
            .collect(),
    )
}
