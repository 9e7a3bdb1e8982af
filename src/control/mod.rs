//! Control-level composition and coordination.
//!
//! This module composes the focused state components into a single control
//! and runs the interaction state machine over inbound events.

mod config;
mod control_state;
mod selection_control;
mod snapshot;

pub use config::ControlConfig;
pub use control_state::ControlState;
pub use selection_control::SelectionControl;
pub use snapshot::{Candidate, RenderSnapshot};
