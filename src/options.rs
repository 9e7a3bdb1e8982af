//! Option source types for the selection control.
//!
//! The control filters and selects from a static, ordered list of
//! `(value, label)` pairs supplied once at construction. The list is
//! read-only for the control's whole lifetime; values are expected to be
//! unique within it (a precondition on the caller, not validated here).

use serde::{Deserialize, Serialize};

/// One selectable entry: a stable identifier plus its display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboOption {
    /// Unique identifier, stable across renders and selections
    pub value: String,
    /// Text shown in the candidate list and used for filtering
    pub label: String,
}

impl ComboOption {
    /// Creates a new option from a value and a display label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Static ordered option source, fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct OptionList {
    options: Vec<ComboOption>,
}

impl OptionList {
    /// Creates an option list from an ordered vector of options.
    pub fn new(options: Vec<ComboOption>) -> Self {
        Self { options }
    }

    /// Returns the number of options in the source list.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if the source list has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Returns the option at the given source index, if in bounds.
    pub fn get(&self, index: usize) -> Option<&ComboOption> {
        self.options.get(index)
    }

    /// Returns the options as an ordered slice.
    pub fn as_slice(&self) -> &[ComboOption] {
        &self.options
    }

    /// Iterates over the options in source order.
    pub fn iter(&self) -> impl Iterator<Item = &ComboOption> {
        self.options.iter()
    }
}

impl From<Vec<ComboOption>> for OptionList {
    fn from(options: Vec<ComboOption>) -> Self {
        Self::new(options)
    }
}
