//! Query text state management.
//!
//! This module encapsulates the free-text filter string. Selection commits
//! rewrite it (single-select) or clear it (multi-select); user edits replace
//! it wholesale.

/// State holding the current free-text filter.
///
/// Responsibilities:
/// - Tracking the text the user has typed into the input
/// - Providing emptiness queries for Backspace tag-pop gating
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    /// Current filter text, empty at construction
    text: String,
}

impl QueryState {
    /// Creates a new query state with empty text.
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    // ===== Queries =====

    /// Returns the current filter text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if the filter text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    // ===== Mutations =====

    /// Replaces the filter text wholesale.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Clears the filter text.
    pub fn clear(&mut self) {
        self.text.clear();
    }
}
