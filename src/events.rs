//! Event vocabulary for the selection control.
//!
//! Inbound events describe discrete user interactions delivered by the
//! rendering layer; render effects are the side-effecting hints the control
//! hands back (scrolling a row into view, refocusing the text input).
//! Events are processed strictly in arrival order, one at a time.

/// Keys the control reacts to. Anything else maps to [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Backspace,
    Tab,
    /// Any key without a dedicated binding
    Other,
}

/// A discrete user interaction consumed by the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// The input text was edited to the given string
    TextChanged(String),
    /// A key was pressed while the input had focus
    KeyPressed(Key),
    /// The trigger area was activated (toggles open/closed)
    TriggerActivated,
    /// A candidate row was activated by pointer; index into the
    /// currently filtered candidate list
    CandidateActivated(usize),
    /// A selected tag's dismiss affordance was activated; carries the
    /// option value to remove (multi-select only)
    TagRemoveActivated(String),
    /// A pointer press occurred outside the control's rendered boundary
    OutsideInteraction,
}

/// Side-effecting hint for the rendering layer, emitted while handling an
/// event. Not part of logical state, but a required observable action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEffect {
    /// Scroll the candidate row at this index into the nearest visible
    /// position. Raised only by keyboard navigation.
    ScrollRowIntoView(usize),
    /// Return focus to the text input
    FocusInput,
}
