use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use widget_types::input::Key as WidgetKey;
use widget_types::{star_label, RatingChange, RatingState, DEFAULT_MAX_RATING};

const STAR_PATH: &str =
    "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";

/// An interactive star rating with hover preview.
///
/// Theme through the `--rating-star-color` custom property, or add the
/// `theme-red` class via `class`.
#[component]
pub fn Rating(
    #[props(default = DEFAULT_MAX_RATING)] max_rating: u32,
    #[props(default)] value: u32,
    #[props(default = false)] readonly: bool,
    #[props(default = true)] show_label: bool,
    /// Extra classes for the container.
    #[props(default)]
    class: String,
    #[props(default)] onrating_change: Option<EventHandler<RatingChange>>,
) -> Element {
    let mut state = use_signal(|| {
        RatingState::new(max_rating)
            .with_value(value)
            .with_readonly(readonly)
    });
    let mut stars = use_signal(HashMap::<usize, Rc<MountedData>>::new);

    use_effect(use_reactive!(|max_rating| {
        if state.peek().max_rating() != max_rating {
            state.write().set_max_rating(max_rating);
        }
    }));
    use_effect(use_reactive!(|value| {
        if state.peek().value() != value {
            state.write().set_value(value);
        }
    }));
    use_effect(use_reactive!(|readonly| {
        if state.peek().is_readonly() != readonly {
            state.write().set_readonly(readonly);
        }
    }));

    let emit = move |change: Option<RatingChange>| {
        if let Some(change) = change {
            tracing::debug!(value = change.value, old = change.old_value, "rating committed");
            if let Some(handler) = &onrating_change {
                handler.call(change);
            }
        }
    };

    let focus_star = move |index: usize| {
        let Some(star) = stars.peek().get(&index).cloned() else {
            return;
        };
        spawn(async move {
            if let Err(err) = star.set_focus(true).await {
                tracing::debug!(index, "could not focus star: {err:?}");
            }
        });
    };

    let snapshot = state.read().clone();
    let label = snapshot.label();
    let container_class = if class.is_empty() {
        "rating".to_string()
    } else {
        format!("rating {class}")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: container_class,
            role: "group",
            "aria-label": "Star rating",
            onmouseleave: move |_| state.write().leave(),
            div { class: "rating-stars",
                for index in 0..snapshot.max_rating() as usize {
                    span {
                        key: "{index}",
                        class: star_class(snapshot.is_filled(index), snapshot.is_readonly()),
                        role: "radio",
                        "aria-checked": snapshot.is_checked(index).to_string(),
                        "aria-label": star_label(index),
                        tabindex: if snapshot.is_readonly() { "-1" } else { "0" },
                        onmounted: move |evt: MountedEvent| {
                            stars.write().insert(index, evt.data());
                        },
                        onclick: move |_| {
                            let change = state.write().click(index);
                            emit(change);
                        },
                        onmouseenter: move |_| state.write().hover(index),
                        onkeydown: move |evt: KeyboardEvent| {
                            let key = WidgetKey::from_dom(&evt.key().to_string());
                            let outcome = state.write().handle_key(index, key);
                            if outcome.handled {
                                evt.prevent_default();
                            }
                            emit(outcome.change);
                            if let Some(next) = outcome.focus {
                                focus_star(next);
                            }
                        },
                        svg {
                            xmlns: "http://www.w3.org/2000/svg",
                            view_box: "0 0 24 24",
                            path { d: STAR_PATH }
                        }
                    }
                }
            }
            if show_label {
                span { class: "rating-label", "{label}" }
            }
        }
    }
}

fn star_class(filled: bool, readonly: bool) -> String {
    let mut class = String::from("rating-star");
    class.push_str(if filled { " filled" } else { " empty" });
    if readonly {
        class.push_str(" readonly");
    }
    class
}
