//! Selection control demo application.
//!
//! Mounts two comboboxes over the same option source - one single-select,
//! one multi-select - and shows their committed state live. The header
//! offers a theme selector and a file dialog for swapping in a custom
//! option list (a JSON array of value/label objects).

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use once_cell::sync::Lazy;

use selectbox::io::load_options_from_file;
use selectbox::{
    ComboBoxWidget, ComboOption, ControlConfig, OptionList, SelectionControl, ThemeManager,
};

/// Built-in option source used until the user loads a custom file.
static SAMPLE_OPTIONS: Lazy<Vec<ComboOption>> = Lazy::new(|| {
    vec![
        ComboOption::new("1", "Apple"),
        ComboOption::new("2", "Banana"),
        ComboOption::new("3", "Cherry"),
        ComboOption::new("4", "Dragonfruit"),
        ComboOption::new("5", "Elderberry"),
        ComboOption::new("6", "Fig"),
        ComboOption::new("7", "Grape"),
        ComboOption::new("8", "Grapefruit"),
        ComboOption::new("9", "Mango"),
        ComboOption::new("10", "Orange"),
        ComboOption::new("11", "Papaya"),
        ComboOption::new("12", "Pineapple"),
    ]
});

/// Main application entry point for the selection control demo.
fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 560.0])
            .with_title("selectbox demo"),
        ..Default::default()
    };

    eframe::run_native(
        "selectbox demo",
        options,
        Box::new(|_cc| Ok(Box::new(SelectBoxDemoApp::new()))),
    )
}

/// The demo application: two controls, a theme manager, and the last
/// load error (if any).
struct SelectBoxDemoApp {
    theme_manager: ThemeManager,
    single: SelectionControl,
    multi: SelectionControl,
    single_widget: ComboBoxWidget,
    multi_widget: ComboBoxWidget,
    error_message: Option<String>,
}

impl SelectBoxDemoApp {
    fn new() -> Self {
        let options = OptionList::new(SAMPLE_OPTIONS.clone());
        Self {
            theme_manager: ThemeManager::new(),
            single: make_single_control(options.clone()),
            multi: make_multi_control(options),
            single_widget: ComboBoxWidget::new("demo_single"),
            multi_widget: ComboBoxWidget::new("demo_multi"),
            error_message: None,
        }
    }

    /// Replaces both controls with fresh ones over a new option source.
    /// All interaction state is discarded, matching the control lifecycle.
    fn reload_options(&mut self, options: OptionList) {
        self.single = make_single_control(options.clone());
        self.multi = make_multi_control(options);
    }

    /// Renders the header: option file loading and theme selection.
    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("📁 Load Options").clicked() {
                let mut dialog = rfd::FileDialog::new().add_filter("Option Lists", &["json"]);
                if let Ok(cwd) = std::env::current_dir() {
                    dialog = dialog.set_directory(cwd);
                }

                if let Some(path) = dialog.pick_file() {
                    match load_options_from_file(&path) {
                        Ok(options) => {
                            self.reload_options(options);
                            self.error_message = None;
                        }
                        Err(error) => {
                            self.error_message = Some(format!("{error:#}"));
                        }
                    }
                }
            }

            if ui.button("↺ Built-in Options").clicked() {
                self.reload_options(OptionList::new(SAMPLE_OPTIONS.clone()));
                self.error_message = None;
            }

            // Push theme selector to the right
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let old_theme = self.theme_manager.current_theme().name.clone();
                let mut current_theme = old_theme.clone();
                egui::ComboBox::from_id_salt("theme_selector")
                    .selected_text(&current_theme)
                    .show_ui(ui, |ui| {
                        for theme_name in self.theme_manager.list_themes() {
                            ui.selectable_value(
                                &mut current_theme,
                                theme_name.to_string(),
                                theme_name,
                            );
                        }
                    });

                if old_theme != current_theme {
                    let _ = self.theme_manager.set_current_theme(&current_theme);
                }

                ui.label("Theme:");
            });
        });

        if let Some(error) = &self.error_message {
            ui.colored_label(egui::Color32::RED, error);
        }
    }

    /// Applies the current theme to the egui context. Called every frame.
    fn apply_current_theme(&self, ctx: &egui::Context) {
        let theme = self.theme_manager.current_theme();
        let mut visuals = if theme.name == "Light" {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };
        self.theme_manager.apply_theme(theme, &mut visuals);
        ctx.set_visuals(visuals);
    }
}

fn make_single_control(options: OptionList) -> SelectionControl {
    SelectionControl::new(
        options,
        ControlConfig::new().with_placeholder("Select a fruit..."),
    )
}

fn make_multi_control(options: OptionList) -> SelectionControl {
    SelectionControl::new(
        options,
        ControlConfig::new()
            .with_placeholder("Select fruits...")
            .with_multi_select(true),
    )
}

impl eframe::App for SelectBoxDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_current_theme(ctx);

        let colors = self.theme_manager.current_theme().colors.clone();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.render_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            ui.heading("Single select");
            self.single_widget.show(ui, &mut self.single, &colors);
            if let Some(option) = self.single.selected().first() {
                ui.label(format!("Selected: {} (value {})", option.label, option.value));
            } else {
                ui.label("Nothing selected");
            }

            ui.add_space(24.0);

            ui.heading("Multi select");
            self.multi_widget.show(ui, &mut self.multi, &colors);
            let chosen: Vec<&str> = self
                .multi
                .selected()
                .iter()
                .map(|option| option.label.as_str())
                .collect();
            if chosen.is_empty() {
                ui.label("Nothing selected");
            } else {
                ui.label(format!("Selected: {}", chosen.join(", ")));
            }
        });
    }
}
