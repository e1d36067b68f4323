//! The dropdown panel state machine.
//!
//! Two states, three transitions. The panel starts hidden; feeding it a
//! query of two or more trimmed characters filters the index and shows it
//! (zero matches still show it, as the placeholder); feeding it anything
//! shorter clears it and hides it; dismissing it hides it without touching
//! the results. Hosts own the wiring: every input edit calls [`Panel::on_query`],
//! Escape and clicks outside the search surfaces call [`Panel::dismiss`].

use crate::search;
use crate::types::{IndexEntry, SearchIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Hidden,
    Active,
}

/// Interaction state of the results dropdown for one session index.
///
/// Results are stored as positions into the [`SearchIndex`] the panel was
/// queried against; the index is immutable for the session, so positions
/// never dangle.
#[derive(Debug)]
pub struct Panel {
    state: PanelState,
    /// Positions into the session index, at most [`search::MAX_RESULTS`].
    results: Vec<usize>,
    /// Highlighted row within `results` (what hover marks on the page).
    selected: usize,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel {
    pub fn new() -> Self {
        Self {
            state: PanelState::Hidden,
            results: Vec::new(),
            selected: 0,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == PanelState::Active
    }

    /// Feeds the current input value. The value is trimmed first: shorter
    /// than [`search::MIN_QUERY_LEN`] clears the results and hides the
    /// panel; anything else filters the index and shows it, zero matches
    /// included. The highlight resets to the first row on every re-query.
    pub fn on_query(&mut self, index: &SearchIndex, raw: &str) {
        let query = raw.trim();
        if query.chars().count() < search::MIN_QUERY_LEN {
            self.results.clear();
            self.selected = 0;
            self.state = PanelState::Hidden;
            return;
        }
        self.results = search::matching_positions(index, query);
        self.selected = 0;
        self.state = PanelState::Active;
    }

    /// The click-outside / Escape transition: hide without clearing. The
    /// retained results are what the page version keeps in the dropdown's
    /// innerHTML after losing its `active` class.
    pub fn dismiss(&mut self) {
        self.state = PanelState::Hidden;
    }

    /// Moves the highlight down one row, stopping on the last.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.results.len() {
            self.selected += 1;
        }
    }

    /// Moves the highlight up one row, stopping on the first.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Puts the highlight on a visible row, as a pointer would.
    pub fn select_row(&mut self, row: usize) {
        if row < self.results.len() {
            self.selected = row;
        }
    }

    /// Index position of the highlighted result while the panel is shown.
    pub fn selected(&self) -> Option<usize> {
        if self.is_active() {
            self.results.get(self.selected).copied()
        } else {
            None
        }
    }

    /// Row of the highlight within the visible results.
    pub fn selected_row(&self) -> usize {
        self.selected
    }

    pub fn selected_entry<'a>(&self, index: &'a SearchIndex) -> Option<&'a IndexEntry> {
        self.selected().and_then(|pos| index.get(pos))
    }

    /// Current results as positions into the session index.
    pub fn results(&self) -> &[usize] {
        &self.results
    }

    pub fn result_entries<'a>(&self, index: &'a SearchIndex) -> Vec<&'a IndexEntry> {
        self.results.iter().filter_map(|&pos| index.get(pos)).collect()
    }

    /// Rows the panel occupies when drawn: one per result, or one for the
    /// placeholder.
    pub fn row_count(&self) -> usize {
        self.results.len().max(1)
    }
}
