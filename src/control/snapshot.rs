//! Outbound render contract.
//!
//! After every state change the rendering collaborator can ask the control
//! for a snapshot describing exactly what to draw: open state, query text,
//! chosen options, the filtered candidate list, and the highlighted row.

use crate::options::ComboOption;

/// One row of the filtered candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Index into the source option list
    pub source_index: usize,
    /// The option to display
    pub option: ComboOption,
}

/// Everything the rendering collaborator needs to draw the control.
#[derive(Debug, Clone)]
pub struct RenderSnapshot {
    /// Whether the candidate list is visible
    pub open: bool,
    /// Current text in the input
    pub query: String,
    /// Placeholder to show in the empty input; `None` once anything is
    /// selected (the selection itself communicates the state)
    pub placeholder: Option<String>,
    /// Chosen options in insertion order (tag row in multi-select)
    pub selected: Vec<ComboOption>,
    /// Filtered candidate rows in source order
    pub candidates: Vec<Candidate>,
    /// Index into `candidates` of the highlighted row, if any
    pub highlight: Option<usize>,
}
