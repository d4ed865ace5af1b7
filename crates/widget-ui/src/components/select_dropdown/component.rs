use dioxus::prelude::*;
use widget_types::input::Key as WidgetKey;
use widget_types::{DropdownChange, DropdownOption, DropdownState, DEFAULT_PLACEHOLDER};

/// A single-value dropdown with keyboard navigation.
///
/// While the list is open a transparent backdrop covers the page; a click on
/// it counts as an outside interaction and closes the list without changing
/// the value. The backdrop absorbs that click, so the element underneath
/// only receives the next one. Tabbing away from the control also closes
/// the list.
#[component]
pub fn SelectDropdown(
    /// Options shown in the list, in display order.
    #[props(default)]
    options: Vec<DropdownOption>,
    /// Committed value. Empty means nothing is selected.
    #[props(default)]
    value: String,
    /// Text shown when the value is unset or not among the options.
    #[props(default = DEFAULT_PLACEHOLDER.to_string())]
    placeholder: String,
    #[props(default = false)] disabled: bool,
    /// Called once per committed selection.
    #[props(default)]
    onchange: Option<EventHandler<DropdownChange>>,
) -> Element {
    let mut state = use_signal(|| {
        DropdownState::new(options.clone())
            .with_value(value.clone())
            .with_disabled(disabled)
    });

    use_effect(use_reactive!(|options| {
        if state.peek().options() != options.as_slice() {
            state.write().set_options(options);
        }
    }));
    use_effect(use_reactive!(|value| {
        if state.peek().selected_value().unwrap_or_default() != value {
            state.write().set_value(value);
        }
    }));
    use_effect(use_reactive!(|disabled| {
        if state.peek().is_disabled() != disabled {
            state.write().set_disabled(disabled);
        }
    }));

    let emit = move |change: Option<DropdownChange>| {
        if let Some(change) = change {
            tracing::debug!(value = %change.value, "dropdown selection committed");
            if let Some(handler) = &onchange {
                handler.call(change);
            }
        }
    };

    let snapshot = state.read().clone();
    let is_open = snapshot.is_open();
    let label = snapshot.display_label(&placeholder).to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "select-dropdown",
            if is_open {
                div {
                    class: "select-dropdown-backdrop",
                    onclick: move |_| state.write().outside_click(),
                }
            }
            button {
                class: "select-dropdown-button",
                r#type: "button",
                disabled: disabled,
                "aria-haspopup": "listbox",
                "aria-expanded": is_open.to_string(),
                "aria-label": "Select dropdown",
                onclick: move |_| state.write().toggle(),
                onkeydown: move |evt: KeyboardEvent| {
                    let key = WidgetKey::from_dom(&evt.key().to_string());
                    let outcome = state.write().handle_key(key);
                    if outcome.handled {
                        evt.prevent_default();
                    }
                    emit(outcome.change);
                },
                span { class: "select-dropdown-label", "{label}" }
                span { class: if is_open { "select-dropdown-arrow open" } else { "select-dropdown-arrow" },
                    "\u{25BC}"
                }
            }
            if is_open {
                ul { class: "select-dropdown-list", role: "listbox",
                    for (index, option) in snapshot.options().iter().enumerate() {
                        li {
                            key: "{option.value}",
                            class: option_class(snapshot.is_selected(index), snapshot.is_focused(index)),
                            role: "option",
                            "aria-selected": snapshot.is_selected(index).to_string(),
                            onclick: move |evt| {
                                evt.stop_propagation();
                                let change = state.write().select(index);
                                emit(change);
                            },
                            onmouseenter: move |_| state.write().hover(index),
                            "{option.label}"
                        }
                    }
                }
            }
        }
    }
}

fn option_class(selected: bool, focused: bool) -> String {
    let mut class = String::from("select-dropdown-option");
    if selected {
        class.push_str(" selected");
    }
    if focused {
        class.push_str(" focused");
    }
    class
}
