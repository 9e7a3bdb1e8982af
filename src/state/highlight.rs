//! Keyboard highlight state management.
//!
//! The highlight is a positional index into the currently filtered
//! candidate list, not an identity reference. It is ephemeral derived
//! state: any filter-affecting change must clear it, and only navigation
//! recomputes it.

use crate::domain::navigation;

/// State holding the positional keyboard highlight.
///
/// Responsibilities:
/// - Tracking which candidate row is highlighted, if any
/// - Stepping the highlight with wraparound against a list length
#[derive(Debug, Clone, Copy, Default)]
pub struct HighlightState {
    /// Index into the filtered candidate list; `None` means no highlight
    index: Option<usize>,
}

impl HighlightState {
    /// Creates a new highlight state with no row highlighted.
    pub fn new() -> Self {
        Self { index: None }
    }

    /// Clears the highlight. Must be called on every filter-affecting
    /// change, since the index is positional.
    pub fn clear(&mut self) {
        self.index = None;
    }

    // ===== Queries =====

    /// Returns the highlighted candidate index, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    // ===== Navigation Mutations =====

    /// Moves the highlight one row down, wrapping from the last row to the
    /// first. No-op when the candidate list is empty.
    ///
    /// # Arguments
    /// * `candidate_count` - Length of the current filtered list
    pub fn step_down(&mut self, candidate_count: usize) {
        self.index = navigation::next_index(self.index, candidate_count);
    }

    /// Moves the highlight one row up, wrapping from the first row to the
    /// last. No-op when the candidate list is empty.
    ///
    /// # Arguments
    /// * `candidate_count` - Length of the current filtered list
    pub fn step_up(&mut self, candidate_count: usize) {
        self.index = navigation::previous_index(self.index, candidate_count);
    }
}
