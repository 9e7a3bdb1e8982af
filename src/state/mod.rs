//! State management modules for the selection control.
//!
//! This module contains state-only logic (no UI concerns):
//! - Open state (whether the candidate list is visible)
//! - Query state (the free-text filter string)
//! - Selection state (the ordered set of chosen options)
//! - Highlight state (the positional keyboard highlight)

mod highlight;
mod open_state;
mod query;
mod selection;

pub use highlight::HighlightState;
pub use open_state::DropdownState;
pub use query::QueryState;
pub use selection::SelectionState;
