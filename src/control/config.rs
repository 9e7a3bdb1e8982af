//! Construction-time configuration for the selection control.

/// Default placeholder shown while nothing is selected and no text typed.
pub const DEFAULT_PLACEHOLDER: &str = "Select an option...";

/// Configuration fixed at control construction.
#[derive(Debug, Clone)]
pub struct ControlConfig {
    /// Placeholder text shown in the empty input
    placeholder: String,
    /// Whether several options may be selected at once
    multi_select: bool,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlConfig {
    /// Creates a single-select configuration with the default placeholder.
    pub fn new() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            multi_select: false,
        }
    }

    /// Sets the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Enables or disables multi-select mode.
    pub fn with_multi_select(mut self, multi_select: bool) -> Self {
        self.multi_select = multi_select;
        self
    }

    // ===== Queries =====

    /// Returns the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Returns true if several options may be selected at once.
    pub fn multi_select(&self) -> bool {
        self.multi_select
    }
}
