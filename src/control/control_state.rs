//! Centralized state for one selection control instance.
//!
//! This module composes focused state components that each manage one
//! aspect of the control. The approach keeps invariants local within each
//! component, allows borrow-checker friendly access to different aspects,
//! and mirrors established Rust UI projects.

use crate::state::{DropdownState, HighlightState, QueryState, SelectionState};

/// Complete mutable state of one control, composed of focused components.
///
/// Each component has private fields and intent-revealing methods; the
/// coordination between them (for example clearing the highlight whenever
/// the query changes) lives in the control, not here.
#[derive(Debug, Clone, Default)]
pub struct ControlState {
    /// Whether the candidate list is visible
    pub dropdown: DropdownState,

    /// Free-text filter state
    pub query: QueryState,

    /// Ordered chosen options
    pub selection: SelectionState,

    /// Positional keyboard highlight
    pub highlight: HighlightState,
}

impl ControlState {
    /// Creates the initial state: closed, empty query, empty selection,
    /// no highlight.
    pub fn new() -> Self {
        Self {
            dropdown: DropdownState::Closed,
            query: QueryState::new(),
            selection: SelectionState::new(),
            highlight: HighlightState::new(),
        }
    }
}
