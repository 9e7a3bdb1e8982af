//! UI rendering subsystem.
//!
//! This module contains the egui adapter for the selection control:
//! - Combobox widget (trigger area, tag row, text input, popup list)
//! - Input translation (egui events into control events)
//! - Render effect application (scroll-into-view, input refocus)

pub mod combobox_widget;

pub use combobox_widget::{ComboBoxResponse, ComboBoxWidget};
