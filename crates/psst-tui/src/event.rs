//! Semantic application events — crossterm input mapped to a widget-agnostic
//! vocabulary so widgets never touch crossterm directly.
//!
//! # Usage
//!
//! In the main event loop, call [`to_app_event`] on every
//! [`crossterm::event::Event`] and match on the returned [`AppEvent`] instead
//! of crossterm types. Handlers run synchronously on the loop thread; each
//! event is fully processed before the next is read.
//!
//! # Bindings
//!
//! The search input is always live (there is no normal/insert split — every
//! printable character belongs to the query), so there is a single mapping.
//!
//! | Input                    | Event                      |
//! |--------------------------|----------------------------|
//! | `Ctrl+c`                 | `Quit`                     |
//! | printable char           | `Char(c)`                  |
//! | `Backspace`              | `Backspace`                |
//! | `Enter`                  | `Enter`                    |
//! | `Escape`                 | `Escape`                   |
//! | `←` / `→`                | `Nav(Left)` / `Nav(Right)` — query cursor |
//! | `↑` / `↓`                | `Nav(Up)` / `Nav(Down)` — result highlight |
//! | mouse wheel up / down    | `Nav(Up)` / `Nav(Down)`    |
//! | left mouse press         | `Click(column, row)`       |
//! | `F1`                     | `HelpToggle`               |
//! | terminal resize          | `Resize(w, h)`             |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};

/// Cardinal direction for cursor and result-highlight movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
///
/// Widgets receive `AppEvent` values — they never inspect crossterm types
/// directly. The App shell routes each event to the search bar, the results
/// panel, or itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// A printable character appended to the query at the cursor.
    Char(char),
    /// Delete the character before the query cursor.
    Backspace,
    /// Activate the highlighted result.
    Enter,
    /// Dismiss the results panel; quit when it is already hidden.
    Escape,
    /// Left/Right move the query cursor; Up/Down move the result highlight.
    Nav(Direction),
    /// Left mouse press at `(column, row)` in terminal cells.
    Click(u16, u16),
    /// Toggle the help popup.
    HelpToggle,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`].
///
/// Returns `None` for events that carry no meaning for the application
/// (mouse drag/release, unbound keys, focus events).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(AppEvent::Click(mouse.column, mouse.row))
            }
            MouseEventKind::ScrollUp => Some(AppEvent::Nav(Direction::Up)),
            MouseEventKind::ScrollDown => Some(AppEvent::Nav(Direction::Down)),
            _ => None,
        },
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Ctrl+c always quits, even mid-query
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        // Arrow keys: ←/→ move the query cursor, ↑/↓ move the highlight
        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        F(1) => Some(AppEvent::HelpToggle),

        // Every printable character — including shifted ones, e.g. uppercase
        // letters while typing — is forwarded verbatim to the query
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
