use pretty_assertions::assert_eq;
use widget_types::input::Key;
use widget_types::{star_label, RatingChange, RatingState};

#[test]
fn click_commits_and_reports_previous_value() {
    let mut state = RatingState::new(5).with_value(2);
    let change = state.click(3);
    assert_eq!(
        change,
        Some(RatingChange {
            value: 4,
            old_value: 2,
        })
    );
    assert_eq!(state.label(), "4.0 / 5.0");
}

#[test]
fn clicking_the_same_star_still_notifies() {
    let mut state = RatingState::new(5).with_value(3);
    assert_eq!(
        state.click(2),
        Some(RatingChange {
            value: 3,
            old_value: 3,
        })
    );
}

#[test]
fn hover_previews_until_pointer_leaves() {
    let mut state = RatingState::new(5).with_value(1);
    state.hover(4);
    assert_eq!(state.display_value(), 5);
    assert!(state.is_filled(4));
    assert!(!state.is_checked(4));
    assert_eq!(state.label(), "5.0 / 5.0");

    state.leave();
    assert_eq!(state.display_value(), 1);
}

#[test]
fn readonly_ignores_interaction() {
    let mut state = RatingState::new(5).with_value(2).with_readonly(true);
    assert_eq!(state.click(4), None);
    state.hover(4);
    assert_eq!(state.display_value(), 2);
    assert_eq!(state.handle_key(1, Key::Enter).change, None);
}

#[test]
fn host_value_is_clamped_silently() {
    let mut state = RatingState::new(3);
    state.set_value(9);
    assert_eq!(state.value(), 3);

    state.set_max_rating(2);
    assert_eq!(state.value(), 2);
    assert_eq!(state.label(), "2.0 / 2.0");
}

#[test]
fn arrow_keys_move_focus_within_bounds() {
    let mut state = RatingState::new(3);
    assert_eq!(state.handle_key(0, Key::ArrowRight).focus, Some(1));
    assert_eq!(state.handle_key(2, Key::ArrowRight).focus, None);
    assert_eq!(state.handle_key(0, Key::ArrowLeft).focus, None);
    assert_eq!(state.handle_key(2, Key::ArrowDown).focus, Some(1));
    assert_eq!(state.value(), 0);
}

#[test]
fn space_on_a_star_commits_it() {
    let mut state = RatingState::new(5);
    let outcome = state.handle_key(1, Key::Space);
    assert!(outcome.handled);
    assert_eq!(outcome.change.map(|c| c.value), Some(2));
}

#[test]
fn change_payload_uses_camel_case() {
    let json = serde_json::to_value(RatingChange {
        value: 4,
        old_value: 1,
    })
    .unwrap();
    assert_eq!(json, serde_json::json!({"value": 4, "oldValue": 1}));
}

#[test]
fn star_labels_pluralize() {
    assert_eq!(star_label(0), "1 star");
    assert_eq!(star_label(4), "5 stars");
}
