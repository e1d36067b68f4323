//! Leniency helpers for scanning rendered HTML with a strict XML reader.
//!
//! `quick-xml` lexes well-formed markup; generated pages are close to that
//! but not quite. This module closes the gap: script/style/comment regions
//! are cut out before the reader sees them (their content is not markup),
//! void elements are known so they never open a nesting level, character
//! references resolve through a small HTML table, and text is normalised
//! the way search input expects.

use std::borrow::Cow;

// ---------------------------------------------------------------------------
// Class and element classification
// ---------------------------------------------------------------------------

/// Elements that never take a closing tag. An unclosed `<br>` or `<img>`
/// must not push a nesting level or every card after it scans wrong.
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link",
    "meta", "param", "source", "track", "wbr",
];

/// `name` must already be lowercased.
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Whether a `class` attribute value contains `token` as a whole
/// whitespace-separated class, the way a CSS class selector matches.
/// `class="post-cards"` does not match `post-card`.
pub fn has_class_token(class_attr: &str, token: &str) -> bool {
    class_attr.split_ascii_whitespace().any(|t| t == token)
}

// ---------------------------------------------------------------------------
// Pre-scan stripping of non-markup regions
// ---------------------------------------------------------------------------

/// Removes `<script>…</script>`, `<style>…</style>` and `<!-- … -->` spans.
///
/// Script bodies are plain text to a browser but look like broken markup to
/// an XML lexer (`if (a < b)`), so they have to go before parsing. Regions
/// are taken left to right: a script inside a comment strips as comment, a
/// comment inside a script strips as script. Unterminated regions run to
/// the end of input.
pub fn strip_noise(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    loop {
        let Some(lt) = rest.find('<') else {
            out.push_str(rest);
            return out;
        };
        out.push_str(&rest[..lt]);
        let tail = &rest[lt..];
        if let Some(after) = strip_comment(tail) {
            rest = after;
        } else if let Some(after) = strip_container(tail, "script") {
            rest = after;
        } else if let Some(after) = strip_container(tail, "style") {
            rest = after;
        } else {
            out.push('<');
            rest = &tail[1..];
        }
    }
}

/// `tail` starts at a `<`. Returns the remainder after `-->` when the span
/// is a comment.
fn strip_comment(tail: &str) -> Option<&str> {
    let body = tail.strip_prefix("<!--")?;
    match body.find("-->") {
        Some(end) => Some(&body[end + 3..]),
        None => Some(""),
    }
}

/// `tail` starts at a `<`. Returns the remainder after `</name …>` when the
/// span opens the named element, eating the whole element including tags.
fn strip_container<'a>(tail: &'a str, name: &str) -> Option<&'a str> {
    let rest = &tail[1..];
    if rest.len() < name.len()
        || !rest.as_bytes()[..name.len()].eq_ignore_ascii_case(name.as_bytes())
    {
        return None;
    }
    // Guard against matching "script" inside "scriptshim".
    match rest.as_bytes().get(name.len()).copied() {
        None | Some(b'>') | Some(b'/') => {}
        Some(c) if c.is_ascii_whitespace() => {}
        _ => return None,
    }
    let (gt, self_closing) = match find_tag_end(rest) {
        Some(found) => found,
        None => return Some(""),
    };
    let after_open = &rest[gt + 1..];
    if self_closing {
        return Some(after_open);
    }
    let close = format!("</{name}");
    let Some(close_at) = find_ascii_ci(after_open, &close) else {
        return Some("");
    };
    let after_close = &after_open[close_at + close.len()..];
    match after_close.find('>') {
        Some(gt) => Some(&after_close[gt + 1..]),
        None => Some(""),
    }
}

/// Position of the `>` ending the open tag `s` begins inside, honouring
/// quoted attribute values, plus whether the tag is self-closing.
fn find_tag_end(s: &str) -> Option<(usize, bool)> {
    let bytes = s.as_bytes();
    let mut quote: Option<u8> = None;
    for (i, &b) in bytes.iter().enumerate() {
        match (quote, b) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, b'"') | (None, b'\'') => quote = Some(b),
            (None, b'>') => return Some((i, i > 0 && bytes[i - 1] == b'/')),
            (None, _) => {}
        }
    }
    None
}

fn find_ascii_ci(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() {
        return None;
    }
    h.windows(n.len()).position(|w| w.eq_ignore_ascii_case(n))
}

// ---------------------------------------------------------------------------
// Character references
// ---------------------------------------------------------------------------

/// References longer than this are treated as a stray `&`, not scanned for.
const MAX_REFERENCE_LEN: usize = 12;

/// Resolves one reference name (the part between `&` and `;`): numeric
/// `#NNN` / `#xHH` forms and the named entities generated pages actually
/// use. Unknown names return `None` and stay literal.
pub fn resolve_reference(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = if let Some(hex) = num.strip_prefix(['x', 'X']) {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            num.parse::<u32>().ok()?
        };
        return char::from_u32(code);
    }
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{00a0}',
        "hellip" => '\u{2026}',
        "mdash" => '\u{2014}',
        "ndash" => '\u{2013}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "copy" => '\u{00a9}',
        "trade" => '\u{2122}',
        _ => return None,
    };
    Some(ch)
}

/// Replaces every `&name;` / `&#NNN;` reference in `raw`. Bare ampersands
/// and unknown names pass through untouched.
pub fn decode_entities(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        match after.find(';') {
            Some(semi)
                if semi > 0
                    && semi <= MAX_REFERENCE_LEN
                    && after[..semi]
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '#') =>
            {
                let name = &after[..semi];
                match resolve_reference(name) {
                    Some(ch) => out.push(ch),
                    None => {
                        out.push('&');
                        out.push_str(name);
                        out.push(';');
                    }
                }
                rest = &after[semi + 1..];
            }
            _ => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

// ---------------------------------------------------------------------------
// Text normalisation
// ---------------------------------------------------------------------------

/// Collapses whitespace runs to single spaces and trims the ends. Rendered
/// markup is full of indentation newlines that `textContent` would carry
/// along; search and a one-line terminal row both want them gone.
pub fn normalize_ws(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }
    out
}
