//! The selection control state machine.
//!
//! `SelectionControl` owns the option source, the configuration, and all
//! mutable state. It consumes discrete interaction events strictly in
//! arrival order; each event's transition completes fully (including
//! derived resets such as clearing the positional highlight) before the
//! next event is handled. Invalid index access and navigation on an empty
//! candidate list are defined no-ops, not faults.

use crate::control::snapshot::{Candidate, RenderSnapshot};
use crate::control::ControlConfig;
use crate::control::ControlState;
use crate::domain::filtering;
use crate::events::{ControlEvent, Key, RenderEffect};
use crate::options::{ComboOption, OptionList};
use crate::state::DropdownState;

/// Interaction state machine for one combobox instance.
pub struct SelectionControl {
    /// Static option source, never mutated
    options: OptionList,
    /// Construction-time configuration
    config: ControlConfig,
    /// All mutable interaction state
    state: ControlState,
}

impl SelectionControl {
    /// Creates a closed, empty control over the given option source.
    pub fn new(options: OptionList, config: ControlConfig) -> Self {
        Self {
            options,
            config,
            state: ControlState::new(),
        }
    }

    // ===== Queries =====

    /// Returns the control configuration.
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Returns the static option source.
    pub fn options(&self) -> &OptionList {
        &self.options
    }

    /// Returns true if the candidate list is visible.
    pub fn is_open(&self) -> bool {
        self.state.dropdown.is_open()
    }

    /// Returns the current filter text.
    pub fn query(&self) -> &str {
        self.state.query.text()
    }

    /// Returns the chosen options in insertion order.
    pub fn selected(&self) -> &[ComboOption] {
        self.state.selection.selected()
    }

    /// Returns the highlighted candidate index, if any.
    pub fn highlight(&self) -> Option<usize> {
        self.state.highlight.index()
    }

    /// Computes the current filtered candidate list as source indices.
    ///
    /// Pure function of the current state; recomputed on demand.
    pub fn candidates(&self) -> Vec<usize> {
        filtering::filter_candidates(
            &self.options,
            self.state.query.text(),
            &self.state.selection,
            self.config.multi_select(),
        )
    }

    /// Builds the full outbound render description for the current state.
    pub fn snapshot(&self) -> RenderSnapshot {
        let candidates = self
            .candidates()
            .into_iter()
            .filter_map(|source_index| {
                self.options.get(source_index).map(|option| Candidate {
                    source_index,
                    option: option.clone(),
                })
            })
            .collect();

        let placeholder = if self.state.selection.is_empty() {
            Some(self.config.placeholder().to_string())
        } else {
            None
        };

        RenderSnapshot {
            open: self.is_open(),
            query: self.state.query.text().to_string(),
            placeholder,
            selected: self.state.selection.selected().to_vec(),
            candidates,
            highlight: self.state.highlight.index(),
        }
    }

    // ===== Event Handling =====

    /// Applies one interaction event and returns the render effects it
    /// produced. The transition is complete when this returns; callers must
    /// deliver events one at a time, in arrival order.
    pub fn handle_event(&mut self, event: ControlEvent) -> Vec<RenderEffect> {
        match event {
            ControlEvent::TextChanged(text) => self.handle_text_changed(text),
            ControlEvent::KeyPressed(key) => self.handle_key(key),
            ControlEvent::TriggerActivated => self.handle_trigger(),
            ControlEvent::CandidateActivated(position) => self.handle_candidate_click(position),
            ControlEvent::TagRemoveActivated(value) => self.handle_tag_removal(&value),
            ControlEvent::OutsideInteraction => self.handle_outside_interaction(),
        }
    }

    /// Text edit: opens the dropdown and invalidates the positional
    /// highlight. In single-select mode an edit also clears the committed
    /// selection; the input now shows a filter, not a choice.
    fn handle_text_changed(&mut self, text: String) -> Vec<RenderEffect> {
        self.state.query.set_text(text);
        if !self.config.multi_select() {
            self.state.selection.clear();
        }
        self.state.dropdown = DropdownState::Open;
        self.state.highlight.clear();
        Vec::new()
    }

    fn handle_key(&mut self, key: Key) -> Vec<RenderEffect> {
        // While closed, any key except Escape and Tab opens the dropdown;
        // opening takes precedence and the key's normal effect is
        // suppressed for this event.
        if !self.state.dropdown.is_open() {
            if !matches!(key, Key::Escape | Key::Tab) {
                self.state.dropdown = DropdownState::Open;
            }
            return Vec::new();
        }

        match key {
            Key::ArrowDown => {
                let count = self.candidates().len();
                self.state.highlight.step_down(count);
                self.scroll_hint()
            }
            Key::ArrowUp => {
                let count = self.candidates().len();
                self.state.highlight.step_up(count);
                self.scroll_hint()
            }
            Key::Enter => {
                let candidates = self.candidates();
                match self.state.highlight.index() {
                    Some(position) if position < candidates.len() => {
                        self.commit_selection(candidates[position])
                    }
                    _ => Vec::new(),
                }
            }
            Key::Escape => {
                self.close_dropdown();
                Vec::new()
            }
            Key::Backspace => {
                if self.config.multi_select()
                    && self.state.query.is_empty()
                    && !self.state.selection.is_empty()
                {
                    self.state.selection.pop_last();
                }
                Vec::new()
            }
            Key::Tab | Key::Other => Vec::new(),
        }
    }

    fn handle_trigger(&mut self) -> Vec<RenderEffect> {
        self.state.dropdown = self.state.dropdown.toggled();
        if self.state.dropdown.is_open() {
            vec![RenderEffect::FocusInput]
        } else {
            self.state.highlight.clear();
            Vec::new()
        }
    }

    /// Pointer activation of a rendered candidate row; `position` indexes
    /// the current filtered list. Out-of-bounds positions are no-ops.
    fn handle_candidate_click(&mut self, position: usize) -> Vec<RenderEffect> {
        let candidates = self.candidates();
        match candidates.get(position) {
            Some(&source_index) => self.commit_selection(source_index),
            None => Vec::new(),
        }
    }

    /// Tag dismiss affordance: removes exactly the matched option. This is
    /// an isolated sub-element action and never toggles the dropdown.
    fn handle_tag_removal(&mut self, value: &str) -> Vec<RenderEffect> {
        if self.config.multi_select() {
            self.state.selection.remove_value(value);
        }
        Vec::new()
    }

    fn handle_outside_interaction(&mut self) -> Vec<RenderEffect> {
        if self.state.dropdown.is_open() {
            self.close_dropdown();
        }
        Vec::new()
    }

    // ===== Transition Helpers =====

    /// Commits the option at the given source index.
    fn commit_selection(&mut self, source_index: usize) -> Vec<RenderEffect> {
        let option = match self.options.get(source_index) {
            Some(option) => option.clone(),
            None => return Vec::new(),
        };

        if self.config.multi_select() {
            // The just-chosen option disappears from the candidates, so the
            // positional highlight is stale and must be cleared.
            self.state.selection.append(option);
            self.state.query.clear();
            self.state.highlight.clear();
        } else {
            self.state.query.set_text(option.label.clone());
            self.state.selection.replace_with(option);
            self.close_dropdown();
        }

        vec![RenderEffect::FocusInput]
    }

    /// Closes the dropdown and drops the now-meaningless highlight.
    /// Query and selection are never touched here.
    fn close_dropdown(&mut self) {
        self.state.dropdown = DropdownState::Closed;
        self.state.highlight.clear();
    }

    /// Scroll hint for the highlighted row, if one exists after a
    /// navigation step.
    fn scroll_hint(&self) -> Vec<RenderEffect> {
        match self.state.highlight.index() {
            Some(index) => vec![RenderEffect::ScrollRowIntoView(index)],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit_control(multi_select: bool) -> SelectionControl {
        let options = OptionList::new(vec![
            ComboOption::new("1", "Apple"),
            ComboOption::new("2", "Banana"),
            ComboOption::new("3", "Cherry"),
        ]);
        SelectionControl::new(options, ControlConfig::new().with_multi_select(multi_select))
    }

    #[test]
    fn starts_closed_and_empty() {
        let control = fruit_control(false);
        assert!(!control.is_open());
        assert_eq!(control.query(), "");
        assert!(control.selected().is_empty());
        assert_eq!(control.highlight(), None);
    }

    #[test]
    fn text_edit_opens_and_clears_highlight() {
        let mut control = fruit_control(false);
        control.handle_event(ControlEvent::KeyPressed(Key::ArrowDown));
        control.handle_event(ControlEvent::KeyPressed(Key::ArrowDown));
        assert_eq!(control.highlight(), Some(0));

        control.handle_event(ControlEvent::TextChanged("an".to_string()));
        assert!(control.is_open());
        assert_eq!(control.highlight(), None);
    }

    #[test]
    fn text_edit_clears_single_select_selection() {
        let mut control = fruit_control(false);
        control.handle_event(ControlEvent::TriggerActivated);
        control.handle_event(ControlEvent::CandidateActivated(0));
        assert_eq!(control.selected().len(), 1);

        control.handle_event(ControlEvent::TextChanged("App".to_string()));
        assert!(control.selected().is_empty());
    }

    #[test]
    fn trigger_toggles_open_state() {
        let mut control = fruit_control(false);

        let effects = control.handle_event(ControlEvent::TriggerActivated);
        assert!(control.is_open());
        assert_eq!(effects, vec![RenderEffect::FocusInput]);

        let effects = control.handle_event(ControlEvent::TriggerActivated);
        assert!(!control.is_open());
        assert!(effects.is_empty());
    }

    #[test]
    fn key_while_closed_only_opens() {
        let mut control = fruit_control(false);
        control.handle_event(ControlEvent::KeyPressed(Key::ArrowDown));
        assert!(control.is_open());
        // Opening took precedence; the arrow itself must not have moved
        // the highlight.
        assert_eq!(control.highlight(), None);
    }

    #[test]
    fn escape_and_tab_while_closed_are_noops() {
        let mut control = fruit_control(false);
        control.handle_event(ControlEvent::KeyPressed(Key::Escape));
        assert!(!control.is_open());
        control.handle_event(ControlEvent::KeyPressed(Key::Tab));
        assert!(!control.is_open());
    }

    #[test]
    fn escape_closes_without_touching_query_or_selection() {
        let mut control = fruit_control(true);
        control.handle_event(ControlEvent::TriggerActivated);
        control.handle_event(ControlEvent::CandidateActivated(0));
        control.handle_event(ControlEvent::TextChanged("che".to_string()));

        control.handle_event(ControlEvent::KeyPressed(Key::Escape));
        assert!(!control.is_open());
        assert_eq!(control.query(), "che");
        assert_eq!(control.selected().len(), 1);
        assert_eq!(control.highlight(), None);
    }

    #[test]
    fn navigation_emits_scroll_hints() {
        let mut control = fruit_control(false);
        control.handle_event(ControlEvent::TriggerActivated);

        let effects = control.handle_event(ControlEvent::KeyPressed(Key::ArrowDown));
        assert_eq!(effects, vec![RenderEffect::ScrollRowIntoView(0)]);

        let effects = control.handle_event(ControlEvent::KeyPressed(Key::ArrowUp));
        assert_eq!(effects, vec![RenderEffect::ScrollRowIntoView(2)]);
    }

    #[test]
    fn navigation_on_empty_list_emits_nothing() {
        let mut control = fruit_control(false);
        control.handle_event(ControlEvent::TextChanged("zzz".to_string()));

        let effects = control.handle_event(ControlEvent::KeyPressed(Key::ArrowDown));
        assert!(effects.is_empty());
        assert_eq!(control.highlight(), None);
    }

    #[test]
    fn enter_without_highlight_is_noop() {
        let mut control = fruit_control(false);
        control.handle_event(ControlEvent::TriggerActivated);
        control.handle_event(ControlEvent::KeyPressed(Key::Enter));
        assert!(control.selected().is_empty());
        assert!(control.is_open());
    }

    #[test]
    fn single_select_commit_closes_and_mirrors_label() {
        let mut control = fruit_control(false);
        control.handle_event(ControlEvent::TriggerActivated);
        control.handle_event(ControlEvent::KeyPressed(Key::ArrowDown));
        let effects = control.handle_event(ControlEvent::KeyPressed(Key::Enter));

        assert_eq!(effects, vec![RenderEffect::FocusInput]);
        assert!(!control.is_open());
        assert_eq!(control.selected().len(), 1);
        assert_eq!(control.selected()[0].label, "Apple");
        assert_eq!(control.query(), "Apple");
    }

    #[test]
    fn multi_select_commit_stays_open_and_clears_query() {
        let mut control = fruit_control(true);
        control.handle_event(ControlEvent::TextChanged("an".to_string()));
        control.handle_event(ControlEvent::KeyPressed(Key::ArrowDown));
        let effects = control.handle_event(ControlEvent::KeyPressed(Key::Enter));

        assert_eq!(effects, vec![RenderEffect::FocusInput]);
        assert!(control.is_open());
        assert_eq!(control.selected().len(), 1);
        assert_eq!(control.query(), "");
        assert_eq!(control.highlight(), None);
    }

    #[test]
    fn backspace_pops_last_selection_only_when_query_empty() {
        let mut control = fruit_control(true);
        control.handle_event(ControlEvent::TriggerActivated);
        control.handle_event(ControlEvent::CandidateActivated(0));
        control.handle_event(ControlEvent::CandidateActivated(0));
        assert_eq!(control.selected().len(), 2);

        control.handle_event(ControlEvent::TextChanged("x".to_string()));
        control.handle_event(ControlEvent::KeyPressed(Key::Backspace));
        assert_eq!(control.selected().len(), 2);

        control.handle_event(ControlEvent::TextChanged(String::new()));
        control.handle_event(ControlEvent::KeyPressed(Key::Backspace));
        assert_eq!(control.selected().len(), 1);
    }

    #[test]
    fn tag_removal_never_toggles_dropdown() {
        let mut control = fruit_control(true);
        control.handle_event(ControlEvent::TriggerActivated);
        control.handle_event(ControlEvent::CandidateActivated(0));
        assert!(control.is_open());

        let value = control.selected()[0].value.clone();
        control.handle_event(ControlEvent::TagRemoveActivated(value));
        assert!(control.is_open());
        assert!(control.selected().is_empty());

        control.handle_event(ControlEvent::TriggerActivated);
        assert!(!control.is_open());
        control.handle_event(ControlEvent::TagRemoveActivated("1".to_string()));
        assert!(!control.is_open());
    }

    #[test]
    fn outside_interaction_closes_but_preserves_state() {
        let mut control = fruit_control(true);
        control.handle_event(ControlEvent::TriggerActivated);
        control.handle_event(ControlEvent::CandidateActivated(0));
        control.handle_event(ControlEvent::TextChanged("ban".to_string()));

        control.handle_event(ControlEvent::OutsideInteraction);
        assert!(!control.is_open());
        assert_eq!(control.query(), "ban");
        assert_eq!(control.selected().len(), 1);

        // While closed the notification is a no-op.
        control.handle_event(ControlEvent::OutsideInteraction);
        assert!(!control.is_open());
    }

    #[test]
    fn snapshot_suppresses_placeholder_once_selected() {
        let mut control = fruit_control(true);
        assert!(control.snapshot().placeholder.is_some());

        control.handle_event(ControlEvent::TriggerActivated);
        control.handle_event(ControlEvent::CandidateActivated(0));
        assert!(control.snapshot().placeholder.is_none());
    }

    #[test]
    fn candidate_click_out_of_bounds_is_noop() {
        let mut control = fruit_control(false);
        control.handle_event(ControlEvent::TriggerActivated);
        let effects = control.handle_event(ControlEvent::CandidateActivated(99));
        assert!(effects.is_empty());
        assert!(control.selected().is_empty());
    }
}
