//! Theme support for the selection control.
//!
//! Provides the color palette the widget paints with, a set of built-in
//! themes (Light, Dark, Dracula) and a centralized theme manager.
//!
//! # Examples
//!
//! ```
//! use selectbox::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Dracula border: {:?}", dracula.colors.border);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Color palette covering every element the widget draws.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub panel_background: Color32,
    pub input_background: Color32,
    pub popup_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub border: Color32,
    pub border_active: Color32,
    pub highlight: Color32,
    pub hover: Color32,

    // Tag colors (multi-select chips)
    pub tag_background: Color32,
    pub tag_text: Color32,
}

/// A complete theme definition with metadata and color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes.
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Dracula".to_string(), dracula_theme());

        Self {
            themes,
            current_theme_name: "Dark".to_string(),
        }
    }

    /// Retrieves a theme by name.
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a sorted list of all available theme names.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected theme.
    pub fn current_theme(&self) -> &Theme {
        self.themes.get(&self.current_theme_name).unwrap()
    }

    /// Sets the current theme by name.
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's colors to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.input_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.highlight;
        visuals.selection.stroke.color = colors.border_active;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.highlight;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme.
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with neutral grays".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(248, 248, 248),
            input_background: Color32::from_rgb(255, 255, 255),
            popup_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),

            border: Color32::from_rgb(160, 160, 160),
            border_active: Color32::from_rgb(40, 100, 200),
            highlight: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),

            tag_background: Color32::from_rgb(225, 235, 255),
            tag_text: Color32::from_rgb(20, 60, 140),
        },
    }
}

/// Creates the Dark theme.
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with muted blues".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(39, 39, 39),
            input_background: Color32::from_rgb(16, 16, 16),
            popup_background: Color32::from_rgb(28, 28, 28),

            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),

            border: Color32::from_rgb(100, 100, 100),
            border_active: Color32::from_rgb(52, 152, 219),
            highlight: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),

            tag_background: Color32::from_rgb(45, 70, 100),
            tag_text: Color32::from_rgb(200, 225, 255),
        },
    }
}

/// Creates the Dracula theme
///
/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: ThemeColors {
            // Background: #282a36, darker contrast: #21222c
            panel_background: hex_to_color32("#282a36"),
            input_background: hex_to_color32("#21222c"),
            popup_background: hex_to_color32("#21222c"),

            // Foreground: #f8f8f2, Comment: #6272a4
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),

            border: hex_to_color32("#6272a4"),
            border_active: hex_to_color32("#bd93f9"),
            // Current Line: #44475a
            highlight: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),

            tag_background: hex_to_color32("#44475a"),
            tag_text: hex_to_color32("#8be9fd"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker).
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}
