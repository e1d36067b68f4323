//! psst-core: page scraping, search index, and panel state.
//!
//! This crate implements everything about the search panel that is not
//! terminal rendering, as four pipeline layers plus shared types.
//!
//! # Architecture
//!
//! ```text
//! Scan ──► SearchIndex ──► search() ──► Panel ──► UI / HTML fragment
//! ```
//!
//! The index is built once per session from a rendered page and never
//! mutated afterwards; the filter borrows it, the panel stores positions
//! into it. Everything runs synchronously on the caller's thread.

pub mod config;
pub mod html;
pub mod index;
pub mod panel;
pub mod render;
pub mod search;
pub mod types;

pub use index::ScanError;
pub use panel::{Panel, PanelState};
pub use search::{search, MAX_RESULTS, MIN_QUERY_LEN};
pub use types::{IndexEntry, SearchIndex};
