use pretty_assertions::assert_eq;
use widget_types::input::Key;
use widget_types::{DropdownChange, DropdownOption, DropdownState};

use crate::common::{color_dropdown, colors};

#[test]
fn arrow_down_then_enter_commits_first_option() {
    let mut state = color_dropdown("");

    let outcome = state.handle_key(Key::ArrowDown);
    assert!(outcome.handled);
    assert!(state.is_open());
    assert_eq!(state.focused_index(), Some(0));

    let outcome = state.handle_key(Key::Enter);
    assert_eq!(
        outcome.change,
        Some(DropdownChange {
            value: "red".into(),
            label: "Red".into(),
        })
    );
    assert!(!state.is_open());
    assert_eq!(state.focused_index(), None);
    assert_eq!(state.display_label("Pick"), "Red");
}

#[test]
fn arrow_down_opens_on_current_selection() {
    let mut state = color_dropdown("green");
    state.handle_key(Key::ArrowDown);
    assert_eq!(state.focused_index(), Some(1));

    state.handle_key(Key::ArrowDown);
    let outcome = state.handle_key(Key::Space);
    assert_eq!(outcome.change.map(|c| c.value), Some("blue".to_string()));
}

#[test]
fn next_reaches_last_option_for_every_list_length() {
    for n in 1..=6 {
        let options = (0..n)
            .map(|i| DropdownOption::new(format!("v{i}"), format!("Option {i}")))
            .collect();
        let mut state = DropdownState::new(options);
        state.handle_key(Key::ArrowDown);
        assert_eq!(state.focused_index(), Some(0), "n = {n}");

        for _ in 0..n - 1 {
            state.handle_key(Key::ArrowDown);
        }
        assert_eq!(state.focused_index(), Some(n - 1), "n = {n}");

        state.handle_key(Key::ArrowDown);
        assert_eq!(state.focused_index(), Some(n - 1), "n = {n}");
    }
}

#[test]
fn tab_closes_without_committing() {
    let mut state = color_dropdown("green");
    state.handle_key(Key::ArrowDown);
    state.handle_key(Key::ArrowDown);

    let outcome = state.handle_key(Key::Tab);
    assert!(!outcome.handled);
    assert_eq!(outcome.change, None);
    assert!(!state.is_open());
    assert_eq!(state.focused_index(), None);
    assert_eq!(state.selected_value(), Some("green"));
}

#[test]
fn cursor_stops_at_both_ends() {
    let mut state = color_dropdown("");
    state.handle_key(Key::ArrowDown);
    for _ in 0..5 {
        state.handle_key(Key::ArrowDown);
    }
    assert_eq!(state.focused_index(), Some(2));

    for _ in 0..5 {
        state.handle_key(Key::ArrowUp);
    }
    assert_eq!(state.focused_index(), Some(0));
}

#[test]
fn escape_closes_without_committing() {
    let mut state = color_dropdown("red");
    state.handle_key(Key::ArrowDown);
    state.handle_key(Key::ArrowDown);

    let outcome = state.handle_key(Key::Escape);
    assert!(!outcome.handled);
    assert_eq!(outcome.change, None);
    assert!(!state.is_open());
    assert_eq!(state.selected_value(), Some("red"));
}

#[test]
fn enter_without_cursor_toggles_the_list() {
    let mut state = color_dropdown("");
    let outcome = state.handle_key(Key::Enter);
    assert!(outcome.handled);
    assert_eq!(outcome.change, None);
    assert!(state.is_open());
    assert_eq!(state.focused_index(), None);

    state.handle_key(Key::Enter);
    assert!(!state.is_open());
}

#[test]
fn arrow_up_on_closed_list_is_consumed_but_inert() {
    let mut state = color_dropdown("blue");
    let outcome = state.handle_key(Key::ArrowUp);
    assert!(outcome.handled);
    assert!(!state.is_open());
}

#[test]
fn unrelated_keys_are_ignored() {
    let mut state = color_dropdown("");
    state.handle_key(Key::ArrowDown);
    let before = state.clone();
    let outcome = state.handle_key(Key::from_dom("a"));
    assert!(!outcome.handled);
    assert_eq!(state, before);
}

#[test]
fn disabled_dropdown_ignores_every_key() {
    let mut state = DropdownState::new(colors()).with_disabled(true);
    for key in [Key::ArrowDown, Key::Enter, Key::Space, Key::ArrowUp] {
        let outcome = state.handle_key(key);
        assert!(!outcome.handled);
        assert!(!state.is_open());
    }
}

#[test]
fn empty_option_list_opens_without_cursor() {
    let mut state = DropdownState::new(Vec::new());
    state.handle_key(Key::ArrowDown);
    assert!(state.is_open());
    assert_eq!(state.focused_index(), None);
    assert_eq!(state.handle_key(Key::Enter).change, None);
}

#[test]
fn dom_key_names_map_to_keys() {
    assert_eq!(Key::from_dom(" "), Key::Space);
    assert_eq!(Key::from_dom("Esc"), Key::Escape);
    assert_eq!(Key::from_dom("ArrowDown"), Key::ArrowDown);
}
