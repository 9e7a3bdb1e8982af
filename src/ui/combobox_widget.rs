//! Combobox widget rendering and input translation.
//!
//! This is the thin rendering adapter over [`SelectionControl`]: it draws
//! the trigger area (tag row, text input, dropdown arrow) and the popup
//! candidate list, translates egui input into [`ControlEvent`]s, and
//! applies the [`RenderEffect`]s the control hands back.
//!
//! Events collected during one frame are delivered to the control in a
//! fixed order that preserves the machine's semantics: tag removals, key
//! presses, text edits, trigger activation, candidate activation, outside
//! interaction. Key presses are delivered before the text edit so that a
//! Backspace is judged against the pre-edit query (tag pop only fires on
//! an already-empty input).

use egui::{Align2, Area, Color32, FontId, Frame, Id, Order, ScrollArea, Sense, Stroke};

use crate::control::{RenderSnapshot, SelectionControl};
use crate::events::{ControlEvent, Key, RenderEffect};
use crate::theme::{adjust_brightness, ThemeColors};

/// Height of one candidate row in the popup.
const ROW_HEIGHT: f32 = 22.0;
/// Maximum popup height before the candidate list scrolls.
const MAX_POPUP_HEIGHT: f32 = 180.0;
/// Width reserved for the dropdown arrow button.
const ARROW_WIDTH: f32 = 26.0;

/// Result of rendering the widget for one frame.
pub struct ComboBoxResponse {
    /// True if the set of chosen options changed this frame
    pub selection_changed: bool,
}

/// Immediate-mode combobox bound to a [`SelectionControl`].
pub struct ComboBoxWidget {
    id: Id,
}

impl ComboBoxWidget {
    /// Creates a widget with a stable id salt. The salt must be unique
    /// among comboboxes shown in the same window.
    pub fn new(id_salt: impl std::hash::Hash) -> Self {
        Self {
            id: Id::new(id_salt),
        }
    }

    /// Renders the control and feeds this frame's interactions through it.
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        control: &mut SelectionControl,
        colors: &ThemeColors,
    ) -> ComboBoxResponse {
        let snapshot = control.snapshot();
        let selected_before: Vec<String> = snapshot
            .selected
            .iter()
            .map(|option| option.value.clone())
            .collect();

        let mut events: Vec<ControlEvent> = Vec::new();
        let mut text_response: Option<egui::Response> = None;

        // ===== Trigger Area =====

        let frame_stroke = if snapshot.open {
            Stroke::new(1.5, colors.border_active)
        } else {
            Stroke::new(1.0, colors.border)
        };

        let frame_response = Frame::default()
            .fill(colors.input_background)
            .stroke(frame_stroke)
            .corner_radius(4.0)
            .inner_margin(6.0)
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    if control.config().multi_select() {
                        for option in &snapshot.selected {
                            if render_tag(ui, &option.label, colors) {
                                events.push(ControlEvent::TagRemoveActivated(option.value.clone()));
                            }
                        }
                    }

                    let response = self.render_input(ui, &snapshot, &mut events, colors);
                    text_response = Some(response);

                    if ui
                        .add(egui::Button::new("⏷").frame(false).min_size(egui::vec2(ARROW_WIDTH - 6.0, 0.0)))
                        .clicked()
                    {
                        events.push(ControlEvent::TriggerActivated);
                    }
                });
            });

        let trigger_rect = frame_response.response.rect;

        // ===== Popup Candidate List =====

        let popup_rect = if snapshot.open {
            Some(self.render_popup(ui, &snapshot, trigger_rect, &mut events, colors))
        } else {
            None
        };

        // ===== Outside Interaction Detection =====
        // Containment test against the union of the trigger area and the
        // open popup; only runs while the widget is shown, so the listener
        // lives exactly as long as the control is mounted.

        if snapshot.open {
            let boundary = match popup_rect {
                Some(popup) => trigger_rect.union(popup),
                None => trigger_rect,
            };
            let pressed_outside = ui.input(|i| {
                i.pointer.any_pressed()
                    && i.pointer
                        .interact_pos()
                        .map_or(false, |pos| !boundary.contains(pos))
            });
            if pressed_outside {
                events.push(ControlEvent::OutsideInteraction);
            }
        }

        // ===== Event Delivery and Effect Application =====

        let mut effects: Vec<RenderEffect> = Vec::new();
        for event in events {
            effects.extend(control.handle_event(event));
        }

        for effect in effects {
            match effect {
                RenderEffect::FocusInput => {
                    if let Some(response) = &text_response {
                        response.request_focus();
                    }
                }
                RenderEffect::ScrollRowIntoView(index) => {
                    // Rows for this frame are already laid out; the scroll
                    // lands when the popup renders next frame.
                    ui.data_mut(|data| data.insert_temp(self.scroll_target_id(), index));
                }
            }
        }

        let selected_after: Vec<&str> = control
            .selected()
            .iter()
            .map(|option| option.value.as_str())
            .collect();
        let selection_changed = selected_before != selected_after;

        ComboBoxResponse { selection_changed }
    }

    /// Renders the text input and translates its keyboard activity.
    fn render_input(
        &self,
        ui: &mut egui::Ui,
        snapshot: &RenderSnapshot,
        events: &mut Vec<ControlEvent>,
        colors: &ThemeColors,
    ) -> egui::Response {
        let mut buffer = snapshot.query.clone();

        let mut edit = egui::TextEdit::singleline(&mut buffer)
            .frame(false)
            .desired_width((ui.available_width() - ARROW_WIDTH).max(60.0))
            .text_color(colors.text);
        if let Some(placeholder) = &snapshot.placeholder {
            edit = edit.hint_text(placeholder.clone());
        }
        let response = ui.add(edit);

        // Keys first: Backspace must see the pre-edit query text.
        if response.has_focus() || response.lost_focus() {
            let pressed = ui.input(|input| {
                let mut keys = Vec::new();
                if input.key_pressed(egui::Key::ArrowDown) {
                    keys.push(Key::ArrowDown);
                }
                if input.key_pressed(egui::Key::ArrowUp) {
                    keys.push(Key::ArrowUp);
                }
                if input.key_pressed(egui::Key::Enter) {
                    keys.push(Key::Enter);
                }
                if input.key_pressed(egui::Key::Escape) {
                    keys.push(Key::Escape);
                }
                if input.key_pressed(egui::Key::Backspace) {
                    keys.push(Key::Backspace);
                }
                if input.key_pressed(egui::Key::Tab) {
                    keys.push(Key::Tab);
                }
                keys
            });
            events.extend(pressed.into_iter().map(ControlEvent::KeyPressed));
        }

        if buffer != snapshot.query {
            events.push(ControlEvent::TextChanged(buffer));
        }

        response
    }

    /// Renders the dropdown candidate list in a foreground area anchored
    /// below the trigger.
    fn render_popup(
        &self,
        ui: &mut egui::Ui,
        snapshot: &RenderSnapshot,
        trigger_rect: egui::Rect,
        events: &mut Vec<ControlEvent>,
        colors: &ThemeColors,
    ) -> egui::Rect {
        let pending_scroll: Option<usize> =
            ui.data_mut(|data| data.remove_temp(self.scroll_target_id()));

        let area_response = Area::new(self.id.with("popup"))
            .order(Order::Foreground)
            .fixed_pos(trigger_rect.left_bottom() + egui::vec2(0.0, 4.0))
            .show(ui.ctx(), |ui| {
                Frame::default()
                    .fill(colors.popup_background)
                    .stroke(Stroke::new(1.0, colors.border))
                    .corner_radius(4.0)
                    .inner_margin(4.0)
                    .show(ui, |ui| {
                        ui.set_min_width(trigger_rect.width() - 8.0);

                        ScrollArea::vertical()
                            .max_height(MAX_POPUP_HEIGHT)
                            .show(ui, |ui| {
                                if snapshot.candidates.is_empty() {
                                    ui.colored_label(colors.text_dim, "No matching options");
                                    return;
                                }

                                for (position, candidate) in snapshot.candidates.iter().enumerate()
                                {
                                    let highlighted = snapshot.highlight == Some(position);
                                    let row = render_candidate_row(
                                        ui,
                                        &candidate.option.label,
                                        highlighted,
                                        colors,
                                    );
                                    if pending_scroll == Some(position) {
                                        row.scroll_to_me(None);
                                    }
                                    if row.clicked() {
                                        events.push(ControlEvent::CandidateActivated(position));
                                    }
                                }
                            });
                    });
            });

        area_response.response.rect
    }

    fn scroll_target_id(&self) -> Id {
        self.id.with("scroll_target")
    }
}

/// Renders one selected tag with its dismiss affordance.
///
/// # Returns
/// `true` if the dismiss affordance was clicked this frame.
fn render_tag(ui: &mut egui::Ui, label: &str, colors: &ThemeColors) -> bool {
    let mut remove_clicked = false;

    Frame::default()
        .fill(colors.tag_background)
        .corner_radius(4.0)
        .inner_margin(3.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors.tag_text, label);
                // Isolated sub-element: the click lands on this button and
                // never reaches the trigger area toggle.
                if ui.add(egui::Button::new("✕").frame(false).small()).clicked() {
                    remove_clicked = true;
                }
            });
        });

    remove_clicked
}

/// Renders one candidate row with highlight and hover feedback.
fn render_candidate_row(
    ui: &mut egui::Ui,
    label: &str,
    highlighted: bool,
    colors: &ThemeColors,
) -> egui::Response {
    let desired = egui::vec2(ui.available_width(), ROW_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(desired, Sense::click());

    let background = if highlighted {
        colors.highlight
    } else if response.hovered() {
        adjust_brightness(colors.hover, 1.15)
    } else {
        Color32::TRANSPARENT
    };
    if background != Color32::TRANSPARENT {
        ui.painter().rect_filled(rect, 3.0, background);
    }

    ui.painter().text(
        rect.left_center() + egui::vec2(6.0, 0.0),
        Align2::LEFT_CENTER,
        label,
        FontId::proportional(14.0),
        colors.text,
    );

    response
}
