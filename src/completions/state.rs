//! Suggestion list state machine
//!
//! ```text
//!            fragment non-empty and >= 1 match
//!   Hidden ─────────────────────────────────────▶ Visible(matches)
//!     ▲                                                 │
//!     └─────────────────────────────────────────────────┘
//!      fragment empty | no match | choice | outside pointer
//! ```
//!
//! Transitions are pure; [`render`] projects the state to text and can be
//! called any number of times.

use super::matcher::{apply_choice, suggest};
use crate::search::TagIndex;

/// Visibility of the suggestion list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SuggestionState {
    #[default]
    Hidden,
    Visible(Vec<String>),
}

impl SuggestionState {
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self, Self::Visible(_))
    }

    /// Visible matches, empty when hidden
    #[must_use]
    pub fn matches(&self) -> &[String] {
        match self {
            Self::Hidden => &[],
            Self::Visible(matches) => matches,
        }
    }
}

/// Where a pointer interaction landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The tag entry field
    Input,
    /// The suggestion list
    Suggestions,
    /// Anywhere else
    Outside,
}

/// Tag entry field paired with its suggestion list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagAutocomplete {
    text: String,
    state: SuggestionState,
}

impl TagAutocomplete {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw text of the tag field
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn state(&self) -> &SuggestionState {
        &self.state
    }

    /// The field's text changed
    pub fn on_input(&mut self, text: impl Into<String>, index: &TagIndex) -> &SuggestionState {
        self.text = text.into();
        let matches = suggest(&self.text, index);
        self.state = if matches.is_empty() {
            SuggestionState::Hidden
        } else {
            SuggestionState::Visible(matches.into_iter().map(String::from).collect())
        };
        &self.state
    }

    /// A suggestion was picked
    ///
    /// Returns `false` and leaves everything untouched when the list is
    /// hidden or `tag` is not one of the visible matches.
    pub fn choose(&mut self, tag: &str) -> bool {
        if !self.state.matches().iter().any(|m| m == tag) {
            return false;
        }
        self.text = apply_choice(&self.text, tag);
        self.state = SuggestionState::Hidden;
        true
    }

    /// A pointer interaction happened somewhere
    pub fn on_pointer(&mut self, target: PointerTarget) {
        if target == PointerTarget::Outside {
            self.state = SuggestionState::Hidden;
        }
    }

    /// Empty the field and hide the list
    pub fn reset(&mut self) {
        self.text.clear();
        self.state = SuggestionState::Hidden;
    }
}

/// Text projection of the suggestion list, `None` when hidden
#[must_use]
pub fn render(state: &SuggestionState) -> Option<String> {
    match state {
        SuggestionState::Hidden => None,
        SuggestionState::Visible(matches) => Some(matches.join("\n")),
    }
}
