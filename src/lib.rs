pub mod control;
pub mod domain;
pub mod events;
pub mod io;
pub mod options;
pub mod state;
pub mod theme;
pub mod ui;

// Export the option source types
pub use options::{ComboOption, OptionList};

// Export the event vocabulary
pub use events::{ControlEvent, Key, RenderEffect};

// Export the control and its outbound contract
pub use control::{Candidate, ControlConfig, ControlState, RenderSnapshot, SelectionControl};

// Export state components
pub use state::{DropdownState, HighlightState, QueryState, SelectionState};

// Export the egui adapter
pub use ui::{ComboBoxResponse, ComboBoxWidget};

// Export theme support
pub use theme::{adjust_brightness, hex_to_color32, Theme, ThemeColors, ThemeManager};
