use pretty_assertions::assert_eq;
use widget_types::{DropdownChange, DropdownOption};

use crate::common::color_dropdown;

#[test]
fn click_open_then_click_option_commits_once() {
    let mut state = color_dropdown("");
    state.toggle();
    assert!(state.is_open());

    let change = state.select(2);
    assert_eq!(
        change,
        Some(DropdownChange {
            value: "blue".into(),
            label: "Blue".into(),
        })
    );
    assert!(!state.is_open());
    assert_eq!(state.select(2), None);
}

#[test]
fn hover_moves_cursor_only() {
    let mut state = color_dropdown("red");
    state.toggle();
    state.hover(1);
    assert!(state.is_focused(1));
    assert!(state.is_selected(0));
    assert_eq!(state.selected_value(), Some("red"));
}

#[test]
fn outside_click_closes_and_keeps_value() {
    let mut state = color_dropdown("green");
    state.toggle();
    state.hover(2);
    state.outside_click();
    assert!(!state.is_open());
    assert_eq!(state.focused_index(), None);
    assert_eq!(state.display_label("Pick"), "Green");
}

#[test]
fn out_of_range_select_clamps_to_last_option() {
    let mut state = color_dropdown("");
    state.toggle();
    assert_eq!(state.select(99).map(|c| c.value), Some("blue".to_string()));
}

#[test]
fn unknown_value_shows_placeholder() {
    let state = color_dropdown("purple");
    assert_eq!(state.selected_index(), None);
    assert_eq!(state.display_label("Pick a color"), "Pick a color");
}

#[test]
fn replacing_options_closes_the_list() {
    let mut state = color_dropdown("red");
    state.toggle();
    state.set_options(vec![DropdownOption::new("red", "Crimson")]);
    assert!(!state.is_open());
    assert_eq!(state.display_label("Pick"), "Crimson");
}

#[test]
fn disabling_closes_and_blocks_pointer() {
    let mut state = color_dropdown("");
    state.toggle();
    state.set_disabled(true);
    assert!(!state.is_open());
    state.toggle();
    assert!(!state.is_open());
}

#[test]
fn options_parse_from_json_attribute() {
    let options =
        DropdownOption::list_from_json(r#"[{"value":"a","label":"Alpha"},{"value":"b","label":"Beta"}]"#)
            .unwrap();
    assert_eq!(options[1], DropdownOption::new("b", "Beta"));
    assert!(DropdownOption::list_from_json("not json").is_err());
}

#[test]
fn change_serializes_for_hosts() {
    let change = DropdownChange {
        value: "red".into(),
        label: "Red".into(),
    };
    let json = serde_json::to_value(&change).unwrap();
    assert_eq!(json, serde_json::json!({"value": "red", "label": "Red"}));
}
