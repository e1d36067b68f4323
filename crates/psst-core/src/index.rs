//! Index construction: one pass over a rendered page.
//!
//! The scanner walks the markup events of a page and collects every post
//! element (class `post-card` or `post-item`) into an [`IndexEntry`], in
//! document order. Within a post element it looks for:
//!
//! * the first `<a>` inside an `<h2>` or `<h3>`: its text becomes the
//!   title, its `href` the URL,
//! * the first element classed `post-summary`: its text content,
//! * every element classed `tag`: each text content, in order.
//!
//! Posts without a title link are dropped silently, and a page with no
//! post elements yields an empty index. Only markup the lenient reader
//! cannot lex at all is an error.

use crate::html;
use crate::types::{IndexEntry, SearchIndex};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a page could not be scanned. Missing content is never an error;
/// these cover I/O and markup the reader gave up on.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read page {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unreadable markup at byte {position}")]
    Markup {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },
}

impl SearchIndex {
    /// Scans a rendered page into an index, leaving hrefs as written.
    pub fn scan(page: &str) -> Result<Self, ScanError> {
        Self::scan_with_base(page, None)
    }

    /// Scans a rendered page, resolving each title link's href against
    /// `base_url` the way `link.href` reads in a browser: absolute and
    /// protocol-relative hrefs pass through, everything else is joined
    /// onto the base.
    pub fn scan_with_base(page: &str, base_url: Option<&str>) -> Result<Self, ScanError> {
        let cleaned = html::strip_noise(page);
        let mut reader = Reader::from_str(&cleaned);
        let cfg = reader.config_mut();
        cfg.trim_text(false);
        cfg.check_end_names = false;
        cfg.allow_unmatched_ends = true;
        cfg.allow_dangling_amp = true;

        let mut scanner = Scanner::new(base_url);
        let mut buf = Vec::new();
        loop {
            let pos = reader.buffer_position();
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => scanner.open_element(&e, false),
                Ok(Event::Empty(e)) => scanner.open_element(&e, true),
                Ok(Event::Text(e)) => scanner.text(&String::from_utf8_lossy(e.as_ref())),
                Ok(Event::CData(e)) => scanner.raw_text(&String::from_utf8_lossy(e.as_ref())),
                Ok(Event::GeneralRef(e)) => {
                    scanner.reference(&String::from_utf8_lossy(e.as_ref()));
                }
                Ok(Event::End(e)) => scanner.close_element(e.name().as_ref()),
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(source) => return Err(ScanError::Markup { position: pos, source }),
            }
            buf.clear();
        }
        Ok(SearchIndex::from_entries(scanner.finish()))
    }

    /// Reads and scans a page from disk.
    pub fn scan_file(path: &Path, base_url: Option<&str>) -> Result<Self, ScanError> {
        let page = std::fs::read_to_string(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::scan_with_base(&page, base_url)
    }
}

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaptureKind {
    TitleLink,
    Summary,
    Tag,
}

/// An open element whose text content we are collecting. `depth` is the
/// stack length including the captured element; the capture finalises when
/// the stack unwinds below it.
struct Capture {
    kind: CaptureKind,
    depth: usize,
    buf: String,
}

/// A post element currently being scraped.
struct OpenCard {
    /// Stack length including the card root.
    depth: usize,
    /// Stack length including the innermost open `<h2>`/`<h3>`, while one
    /// is open.
    heading_depth: Option<usize>,
    href: Option<String>,
    title: Option<String>,
    summary: Option<String>,
    tags: Vec<String>,
    captures: Vec<Capture>,
}

struct Scanner<'a> {
    base_url: Option<&'a str>,
    /// Lowercased names of open elements. Void elements never push.
    stack: Vec<String>,
    card: Option<OpenCard>,
    entries: Vec<IndexEntry>,
}

impl<'a> Scanner<'a> {
    fn new(base_url: Option<&'a str>) -> Self {
        Self {
            base_url,
            stack: Vec::new(),
            card: None,
            entries: Vec::new(),
        }
    }

    fn open_element(&mut self, e: &BytesStart<'_>, self_closing: bool) {
        let name = String::from_utf8_lossy(e.name().as_ref()).to_ascii_lowercase();
        if self_closing || html::is_void_element(&name) {
            // Nothing with text content; cannot root a card either.
            return;
        }
        let is_heading = name == "h2" || name == "h3";
        let is_anchor = name == "a";
        self.stack.push(name);
        let depth = self.stack.len();
        let class = attr_value(e, b"class").unwrap_or_default();

        let Some(card) = self.card.as_mut() else {
            if html::has_class_token(&class, "post-card")
                || html::has_class_token(&class, "post-item")
            {
                self.card = Some(OpenCard {
                    depth,
                    heading_depth: None,
                    href: None,
                    title: None,
                    summary: None,
                    tags: Vec::new(),
                    captures: Vec::new(),
                });
            }
            return;
        };

        if is_heading && card.heading_depth.is_none() {
            card.heading_depth = Some(depth);
        }
        if is_anchor
            && card.heading_depth.is_some()
            && card.title.is_none()
            && !card.has_open(CaptureKind::TitleLink)
        {
            card.href = attr_value(e, b"href");
            card.open_capture(CaptureKind::TitleLink, depth);
        }
        if html::has_class_token(&class, "post-summary")
            && card.summary.is_none()
            && !card.has_open(CaptureKind::Summary)
        {
            card.open_capture(CaptureKind::Summary, depth);
        }
        if html::has_class_token(&class, "tag") {
            card.open_capture(CaptureKind::Tag, depth);
        }
    }

    fn close_element(&mut self, raw_name: &[u8]) {
        let name = String::from_utf8_lossy(raw_name).to_ascii_lowercase();
        // Closing an element implicitly closes everything opened inside it
        // that never got its own end tag. Stray end tags are ignored.
        if let Some(pos) = self.stack.iter().rposition(|n| *n == name) {
            self.unwind(pos);
        }
    }

    /// Text between markup events; entity references still escaped.
    fn text(&mut self, raw: &str) {
        if self.has_active_capture() {
            let decoded = html::decode_entities(raw);
            self.append(&decoded);
        }
    }

    /// CDATA content, taken verbatim.
    fn raw_text(&mut self, raw: &str) {
        if self.has_active_capture() {
            self.append(raw);
        }
    }

    /// A `&name;` reference the reader reported as its own event.
    fn reference(&mut self, name: &str) {
        if !self.has_active_capture() {
            return;
        }
        match html::resolve_reference(name) {
            Some(ch) => self.append(ch.encode_utf8(&mut [0u8; 4])),
            None => self.append(&format!("&{name};")),
        }
    }

    fn finish(mut self) -> Vec<IndexEntry> {
        self.unwind(0);
        self.entries
    }

    fn has_active_capture(&self) -> bool {
        self.card.as_ref().is_some_and(|c| !c.captures.is_empty())
    }

    fn append(&mut self, text: &str) {
        if let Some(card) = self.card.as_mut() {
            for capture in &mut card.captures {
                capture.buf.push_str(text);
            }
        }
    }

    /// Pops the element stack down to `new_len`, finalising captures, the
    /// open heading, and the open card as their depths unwind.
    fn unwind(&mut self, new_len: usize) {
        while self.stack.len() > new_len {
            self.stack.pop();
            let depth = self.stack.len();
            if let Some(card) = self.card.as_mut() {
                while card
                    .captures
                    .last()
                    .is_some_and(|capture| capture.depth > depth)
                {
                    if let Some(capture) = card.captures.pop() {
                        card.finalize_capture(capture);
                    }
                }
                if card.heading_depth.is_some_and(|d| d > depth) {
                    card.heading_depth = None;
                }
                if depth < card.depth {
                    self.finish_card();
                }
            }
        }
    }

    fn finish_card(&mut self) {
        let Some(card) = self.card.take() else { return };
        let Some(title) = card.title else { return };
        let href = card.href.unwrap_or_default();
        self.entries.push(IndexEntry {
            title,
            url: resolve_url(&href, self.base_url),
            summary: card.summary.unwrap_or_default(),
            tags: card.tags,
        });
    }
}

impl OpenCard {
    fn has_open(&self, kind: CaptureKind) -> bool {
        self.captures.iter().any(|c| c.kind == kind)
    }

    fn open_capture(&mut self, kind: CaptureKind, depth: usize) {
        self.captures.push(Capture {
            kind,
            depth,
            buf: String::new(),
        });
    }

    fn finalize_capture(&mut self, capture: Capture) {
        let text = html::normalize_ws(&capture.buf);
        match capture.kind {
            CaptureKind::TitleLink => {
                if self.title.is_none() {
                    self.title = Some(text);
                }
            }
            CaptureKind::Summary => {
                if self.summary.is_none() {
                    self.summary = Some(text);
                }
            }
            CaptureKind::Tag => self.tags.push(text),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// First attribute named `name` (ASCII-case-insensitive), entity-decoded.
/// Malformed attributes are skipped rather than failing the page.
fn attr_value(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    for attr in e.html_attributes().flatten() {
        if attr.key.as_ref().eq_ignore_ascii_case(name) {
            let raw = String::from_utf8_lossy(&attr.value);
            return Some(html::decode_entities(&raw).into_owned());
        }
    }
    None
}

/// What `link.href` would read back: scheme-qualified and
/// protocol-relative hrefs pass through, everything else joins onto the
/// configured base. With no base the href passes through as written.
fn resolve_url(href: &str, base_url: Option<&str>) -> String {
    let Some(base) = base_url else {
        return href.to_string();
    };
    let base = base.trim_end_matches('/');
    if base.is_empty()
        || href.starts_with("http://")
        || href.starts_with("https://")
        || href.starts_with("//")
    {
        return href.to_string();
    }
    format!("{base}/{}", href.trim_start_matches('/'))
}
