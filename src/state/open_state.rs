//! Dropdown visibility state.
//!
//! The control's candidate list is either closed or open. There is no
//! terminal state; the machine lives for the control's lifetime and starts
//! closed.

/// Whether the candidate list is currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    /// Candidate list hidden
    #[default]
    Closed,
    /// Candidate list visible
    Open,
}

impl DropdownState {
    /// Returns true if the candidate list is visible.
    pub fn is_open(self) -> bool {
        matches!(self, DropdownState::Open)
    }

    /// Returns the opposite state (trigger-area toggle semantics).
    pub fn toggled(self) -> Self {
        match self {
            DropdownState::Closed => DropdownState::Open,
            DropdownState::Open => DropdownState::Closed,
        }
    }
}
