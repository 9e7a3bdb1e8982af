//! Selected-option state management.
//!
//! This module encapsulates the ordered sequence of currently chosen
//! options. Insertion order is load-bearing: Backspace with an empty query
//! removes the most-recently-added member (stack-pop semantics), so the
//! sequence is an explicit `Vec`, never an unordered set.

use crate::options::ComboOption;

/// State related to the chosen options.
///
/// Responsibilities:
/// - Tracking chosen options in insertion order
/// - Enforcing value uniqueness within the selection
/// - Providing stack-pop and remove-by-value mutations
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Chosen options, oldest first
    selected: Vec<ComboOption>,
}

impl SelectionState {
    /// Creates a new selection state with nothing selected.
    pub fn new() -> Self {
        Self {
            selected: Vec::new(),
        }
    }

    /// Clears the whole selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    // ===== Queries =====

    /// Returns the chosen options in insertion order.
    pub fn selected(&self) -> &[ComboOption] {
        &self.selected
    }

    /// Returns the number of chosen options.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns true if an option with the given value is selected.
    pub fn contains_value(&self, value: &str) -> bool {
        self.selected.iter().any(|option| option.value == value)
    }

    // ===== Mutations =====

    /// Replaces the whole selection with a single option
    /// (single-select commit semantics).
    pub fn replace_with(&mut self, option: ComboOption) {
        self.selected.clear();
        self.selected.push(option);
    }

    /// Appends an option to the selection, preserving insertion order
    /// (multi-select commit semantics).
    ///
    /// # Returns
    /// `true` if the option was appended, `false` if its value was
    /// already selected.
    pub fn append(&mut self, option: ComboOption) -> bool {
        if self.contains_value(&option.value) {
            return false;
        }
        self.selected.push(option);
        true
    }

    /// Removes and returns the most-recently-added option
    /// (Backspace stack-pop semantics).
    pub fn pop_last(&mut self) -> Option<ComboOption> {
        self.selected.pop()
    }

    /// Removes the option with the given value, leaving the order of the
    /// remaining options unchanged (tag-removal semantics).
    ///
    /// # Returns
    /// The removed option, or `None` if no option had that value.
    pub fn remove_value(&mut self, value: &str) -> Option<ComboOption> {
        let position = self
            .selected
            .iter()
            .position(|option| option.value == value)?;
        Some(self.selected.remove(position))
    }
}
