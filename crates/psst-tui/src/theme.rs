//! Colour theme for the psst TUI.
//!
//! Themes are defined as TOML files. Both shipped themes are embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Call [`Theme::by_name`] with the configured theme name at startup
//! and pass the result through the application as a shared reference.
//!
//! The `default` theme mirrors the visual tokens of the stylesheet the
//! scanned pages reference: cyan accent titles, dim secondary summaries, a
//! darker background for the highlighted (hovered) result.
//!
//! # Colour assignment for tags
//!
//! Tag names are hashed to a stable index into the palette so the same tag
//! always gets the same colour within a session, regardless of the order
//! tags appear on the page.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(ref s) = self.fg {
            if let Some(c) = parse_color(s) {
                style = style.fg(c);
            }
        }
        if let Some(ref s) = self.bg {
            if let Some(c) = parse_color(s) {
                style = style.bg(c);
            }
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawResults {
    title: RawStyle,
    summary: RawStyle,
    selected: RawStyle,
    placeholder: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    search: RawStyle,
    panel: RawStyle,
    backdrop: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawHeader {
    status: RawStyle,
    hints: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBackdrop {
    post: RawStyle,
    overflow: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTags {
    palette: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    results: RawResults,
    borders: RawBorders,
    header: RawHeader,
    backdrop: RawBackdrop,
    tags: RawTags,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme.
///
/// All styles are pre-resolved ratatui [`Style`] values — no allocation at
/// render time.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Result title line in the dropdown (the page's accent colour).
    pub result_title: Style,
    /// Truncated summary line under each result title.
    pub result_summary: Style,
    /// Patched over both lines of the highlighted result (hover analog).
    pub result_selected: Style,
    /// The "No results found" row.
    pub placeholder: Style,

    /// Border of the search bar.
    pub border_search: Style,
    /// Border of the results dropdown.
    pub border_panel: Style,
    /// Border of the backdrop post list.
    pub border_backdrop: Style,

    /// Left-hand header text (app name, page, entry count).
    pub header_status: Style,
    /// Right-aligned key hints in the header row.
    pub header_hints: Style,

    /// Post titles in the backdrop list.
    pub post_title: Style,
    /// The `… N more posts` overflow line.
    pub post_overflow: Style,

    /// Ordered colour palette used for tag colour cycling.
    tag_palette: Vec<Color>,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. The default theme is
    /// validated at compile time via `include_str!`, so this should never
    /// happen in practice.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Resolve a configured theme name to an embedded theme. Unknown names
    /// fall back to the default theme.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Self::load_gruvbox_dark(),
            _ => Self::load_default(),
        }
    }

    /// Parse a theme from a TOML string.
    ///
    /// Returns an error if the string cannot be deserialised into a valid
    /// theme. Unknown keys are ignored so user themes can be
    /// forward-compatible with future theme additions.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            result_title: raw.results.title.into_style(),
            result_summary: raw.results.summary.into_style(),
            result_selected: raw.results.selected.into_style(),
            placeholder: raw.results.placeholder.into_style(),
            border_search: raw.borders.search.into_style(),
            border_panel: raw.borders.panel.into_style(),
            border_backdrop: raw.borders.backdrop.into_style(),
            header_status: raw.header.status.into_style(),
            header_hints: raw.header.hints.into_style(),
            post_title: raw.backdrop.post.into_style(),
            post_overflow: raw.backdrop.overflow.into_style(),
            tag_palette: raw
                .tags
                .palette
                .iter()
                .filter_map(|s| parse_color(s))
                .collect(),
        })
    }

    /// Return a stable [`Style`] for a tag name.
    ///
    /// The colour is determined by hashing the name and taking the result
    /// modulo the palette length. The same tag always maps to the same colour
    /// within a session, regardless of the order tags appear.
    pub fn tag_style(&self, tag: &str) -> Style {
        if self.tag_palette.is_empty() {
            return Style::default();
        }
        let idx = stable_hash(tag) % self.tag_palette.len();
        Style::default().fg(self.tag_palette[idx])
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Simple djb2-style hash that is stable across Rust versions and process
/// restarts, making tag colour assignment deterministic.
fn stable_hash(s: &str) -> usize {
    s.bytes().fold(5381usize, |acc, b| {
        acc.wrapping_mul(31).wrapping_add(b as usize)
    })
}

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `cyan`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
