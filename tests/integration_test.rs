//! End-to-end interaction scenarios driven through the event interface,
//! the way a rendering collaborator would deliver them.

use selectbox::{
    ComboOption, ControlConfig, ControlEvent, Key, OptionList, RenderEffect, SelectionControl,
};

fn fruit_options() -> OptionList {
    OptionList::new(vec![
        ComboOption::new("1", "Apple"),
        ComboOption::new("2", "Banana"),
        ComboOption::new("3", "Cherry"),
    ])
}

fn single_select() -> SelectionControl {
    SelectionControl::new(fruit_options(), ControlConfig::new())
}

fn multi_select() -> SelectionControl {
    SelectionControl::new(fruit_options(), ControlConfig::new().with_multi_select(true))
}

fn selected_labels(control: &SelectionControl) -> Vec<&str> {
    control
        .selected()
        .iter()
        .map(|option| option.label.as_str())
        .collect()
}

fn candidate_labels(control: &SelectionControl) -> Vec<String> {
    control
        .snapshot()
        .candidates
        .iter()
        .map(|candidate| candidate.option.label.clone())
        .collect()
}

#[test]
fn type_navigate_commit_single_select() {
    let mut control = single_select();

    // Type "an": matches Banana (b-an-ana) only among the three labels.
    control.handle_event(ControlEvent::TextChanged("an".to_string()));
    assert!(control.is_open());
    assert_eq!(candidate_labels(&control), vec!["Banana"]);

    // Navigate onto the row (a second ArrowDown wraps back onto the only
    // match) and commit.
    control.handle_event(ControlEvent::KeyPressed(Key::ArrowDown));
    control.handle_event(ControlEvent::KeyPressed(Key::ArrowDown));
    assert_eq!(control.highlight(), Some(0));
    let effects = control.handle_event(ControlEvent::KeyPressed(Key::Enter));

    assert_eq!(effects, vec![RenderEffect::FocusInput]);
    assert_eq!(selected_labels(&control), vec!["Banana"]);
    assert_eq!(control.query(), "Banana");
    assert!(!control.is_open());
}

#[test]
fn arrow_navigation_wraps_both_directions() {
    let mut control = single_select();
    control.handle_event(ControlEvent::TriggerActivated);

    // Down three times lands on the last row, once more wraps to the first.
    control.handle_event(ControlEvent::KeyPressed(Key::ArrowDown));
    control.handle_event(ControlEvent::KeyPressed(Key::ArrowDown));
    control.handle_event(ControlEvent::KeyPressed(Key::ArrowDown));
    assert_eq!(control.highlight(), Some(2));
    control.handle_event(ControlEvent::KeyPressed(Key::ArrowDown));
    assert_eq!(control.highlight(), Some(0));

    // Up from the first row wraps back to the last.
    let effects = control.handle_event(ControlEvent::KeyPressed(Key::ArrowUp));
    assert_eq!(control.highlight(), Some(2));
    assert_eq!(effects, vec![RenderEffect::ScrollRowIntoView(2)]);
}

#[test]
fn navigation_on_empty_filtered_list_changes_nothing() {
    let mut control = single_select();
    control.handle_event(ControlEvent::TextChanged("xyz".to_string()));
    assert!(candidate_labels(&control).is_empty());

    control.handle_event(ControlEvent::KeyPressed(Key::ArrowDown));
    control.handle_event(ControlEvent::KeyPressed(Key::ArrowUp));
    control.handle_event(ControlEvent::KeyPressed(Key::Enter));

    assert!(control.selected().is_empty());
    assert_eq!(control.highlight(), None);
    assert!(control.is_open());
}

#[test]
fn multi_select_accumulates_and_backspace_pops() {
    let mut control = multi_select();

    // Select Apple: first candidate of the unfiltered list.
    control.handle_event(ControlEvent::TriggerActivated);
    control.handle_event(ControlEvent::CandidateActivated(0));
    assert_eq!(selected_labels(&control), vec!["Apple"]);
    assert_eq!(control.query(), "");
    assert!(control.is_open());

    // Apple is gone from the candidates; Cherry now sits at position 1.
    assert_eq!(candidate_labels(&control), vec!["Banana", "Cherry"]);
    control.handle_event(ControlEvent::CandidateActivated(1));
    assert_eq!(selected_labels(&control), vec!["Apple", "Cherry"]);

    // Backspace on an empty query pops the most recent pick.
    control.handle_event(ControlEvent::KeyPressed(Key::Backspace));
    assert_eq!(selected_labels(&control), vec!["Apple"]);

    // Pop the rest, then one more is a no-op.
    control.handle_event(ControlEvent::KeyPressed(Key::Backspace));
    assert!(control.selected().is_empty());
    control.handle_event(ControlEvent::KeyPressed(Key::Backspace));
    assert!(control.selected().is_empty());
}

#[test]
fn multi_select_commit_increases_selection_by_exactly_one() {
    let mut control = multi_select();
    control.handle_event(ControlEvent::TriggerActivated);

    for expected_len in 1..=3 {
        control.handle_event(ControlEvent::CandidateActivated(0));
        assert_eq!(control.selected().len(), expected_len);
        assert_eq!(control.query(), "");
        assert!(control.is_open());
    }

    // Source exhausted; a further activation has no candidate to hit.
    assert!(candidate_labels(&control).is_empty());
    control.handle_event(ControlEvent::CandidateActivated(0));
    assert_eq!(control.selected().len(), 3);
}

#[test]
fn outside_interaction_dismisses_without_losing_state() {
    let mut control = multi_select();
    control.handle_event(ControlEvent::TriggerActivated);
    control.handle_event(ControlEvent::CandidateActivated(0));
    control.handle_event(ControlEvent::TextChanged("ch".to_string()));
    assert!(control.is_open());

    control.handle_event(ControlEvent::OutsideInteraction);
    assert!(!control.is_open());
    assert_eq!(control.query(), "ch");
    assert_eq!(selected_labels(&control), vec!["Apple"]);
}

#[test]
fn removed_tag_reappears_in_candidates() {
    let mut control = multi_select();
    control.handle_event(ControlEvent::TriggerActivated);
    control.handle_event(ControlEvent::CandidateActivated(1));
    assert_eq!(selected_labels(&control), vec!["Banana"]);
    assert_eq!(candidate_labels(&control), vec!["Apple", "Cherry"]);

    control.handle_event(ControlEvent::TagRemoveActivated("2".to_string()));
    assert!(control.selected().is_empty());
    assert_eq!(candidate_labels(&control), vec!["Apple", "Banana", "Cherry"]);
}

#[test]
fn tag_removal_keeps_order_of_remaining_tags() {
    let mut control = multi_select();
    control.handle_event(ControlEvent::TriggerActivated);
    control.handle_event(ControlEvent::CandidateActivated(0)); // Apple
    control.handle_event(ControlEvent::CandidateActivated(0)); // Banana
    control.handle_event(ControlEvent::CandidateActivated(0)); // Cherry
    assert_eq!(selected_labels(&control), vec!["Apple", "Banana", "Cherry"]);

    control.handle_event(ControlEvent::TagRemoveActivated("2".to_string()));
    assert_eq!(selected_labels(&control), vec!["Apple", "Cherry"]);
}

#[test]
fn escape_closes_and_preserves_everything() {
    let mut control = single_select();
    control.handle_event(ControlEvent::TextChanged("a".to_string()));
    control.handle_event(ControlEvent::KeyPressed(Key::ArrowDown));
    assert_eq!(control.highlight(), Some(0));

    control.handle_event(ControlEvent::KeyPressed(Key::Escape));
    assert!(!control.is_open());
    assert_eq!(control.query(), "a");
    assert_eq!(control.highlight(), None);
}

#[test]
fn any_key_while_closed_opens_without_side_effects() {
    let mut control = multi_select();
    control.handle_event(ControlEvent::TriggerActivated);
    control.handle_event(ControlEvent::CandidateActivated(0));
    control.handle_event(ControlEvent::KeyPressed(Key::Escape));
    assert!(!control.is_open());

    // Backspace while closed with an empty query: opening takes precedence,
    // so the tag pop is suppressed for this event.
    control.handle_event(ControlEvent::KeyPressed(Key::Backspace));
    assert!(control.is_open());
    assert_eq!(control.selected().len(), 1);

    control.handle_event(ControlEvent::KeyPressed(Key::Escape));
    control.handle_event(ControlEvent::KeyPressed(Key::Other));
    assert!(control.is_open());
    assert_eq!(control.highlight(), None);
}

#[test]
fn single_select_reselection_replaces_wholesale() {
    let mut control = single_select();
    control.handle_event(ControlEvent::TriggerActivated);
    control.handle_event(ControlEvent::CandidateActivated(0));
    assert_eq!(selected_labels(&control), vec!["Apple"]);

    // Editing the query clears the committed choice; the input is a
    // filter again.
    control.handle_event(ControlEvent::TextChanged("Cher".to_string()));
    assert!(control.selected().is_empty());

    control.handle_event(ControlEvent::CandidateActivated(0));
    assert_eq!(selected_labels(&control), vec!["Cherry"]);
    assert_eq!(control.query(), "Cherry");
    assert!(!control.is_open());
}

#[test]
fn snapshot_reflects_highlight_and_filter() {
    let mut control = single_select();
    control.handle_event(ControlEvent::TextChanged("a".to_string()));
    control.handle_event(ControlEvent::KeyPressed(Key::ArrowDown));
    control.handle_event(ControlEvent::KeyPressed(Key::ArrowDown));

    let snapshot = control.snapshot();
    assert!(snapshot.open);
    assert_eq!(snapshot.query, "a");
    // "a" matches Apple and Banana, not Cherry.
    let labels: Vec<&str> = snapshot
        .candidates
        .iter()
        .map(|candidate| candidate.option.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Apple", "Banana"]);
    assert_eq!(snapshot.highlight, Some(1));
}
