use dioxus::prelude::*;
use widget_types::{DaySelected, DropdownChange, RatingChange, ToastKind, ALL_TOAST_KINDS};
use widget_ui::{Accordion, Calendar, Rating, SelectDropdown, Toast, ToastRegion};

mod config;

fn main() {
    config::load_config();
    dioxus::launch(App);
}

/// A toast the gallery has raised and not yet removed.
#[derive(Clone, Debug, PartialEq)]
struct ActiveToast {
    id: u64,
    kind: ToastKind,
    message: String,
}

#[component]
fn App() -> Element {
    let settings = config::config();
    let mut language = use_signal(String::new);
    let mut dropdown_disabled = use_signal(|| false);
    let mut rating = use_signal(|| 3u32);
    let mut picked_day = use_signal(|| None::<DaySelected>);
    let mut toasts = use_signal(Vec::<ActiveToast>::new);
    let mut next_toast_id = use_signal(|| 0u64);

    let mut raise = move |kind: ToastKind, message: String| {
        let id = *next_toast_id.peek();
        next_toast_id.set(id + 1);
        toasts.write().push(ActiveToast { id, kind, message });
    };

    let picked = match picked_day.read().as_ref() {
        Some(day) => day.date.format("%A, %-d %B %Y").to_string(),
        None => "No day picked yet".to_string(),
    };
    let current_language = language.read().clone();
    let current_rating = *rating.read();

    rsx! {
        main { class: "gallery",
            h1 { "Widget gallery" }

            section { class: "gallery-section",
                h2 { "Select dropdown" }
                SelectDropdown {
                    options: settings.gallery.options.clone(),
                    value: current_language,
                    placeholder: settings.dropdown.placeholder.clone(),
                    disabled: *dropdown_disabled.read(),
                    onchange: move |change: DropdownChange| {
                        tracing::info!(value = %change.value, label = %change.label, "language changed");
                        raise(ToastKind::Info, format!("Selected {}", change.label));
                        language.set(change.value);
                    },
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: *dropdown_disabled.read(),
                        onchange: move |evt: FormEvent| dropdown_disabled.set(evt.checked()),
                    }
                    " Disabled"
                }
            }

            section { class: "gallery-section",
                h2 { "Star rating" }
                Rating {
                    max_rating: settings.rating.max_rating,
                    value: current_rating,
                    show_label: settings.rating.show_label,
                    onrating_change: move |change: RatingChange| {
                        tracing::info!(value = change.value, old = change.old_value, "rating changed");
                        rating.set(change.value);
                    },
                }
                Rating { max_rating: settings.rating.max_rating, value: current_rating, readonly: true, class: "theme-red" }
            }

            section { class: "gallery-section",
                h2 { "Calendar" }
                Calendar {
                    onday_selected: move |day: DaySelected| {
                        tracing::info!(date = %day.date, "day selected");
                        picked_day.set(Some(day));
                    },
                }
                p { "{picked}" }
            }

            section { class: "gallery-section",
                h2 { "Accordion" }
                Accordion {
                    title: "What is this page?",
                    ontoggle: move |open: bool| tracing::debug!(open, "accordion toggled"),
                    p { "A live preview of every widget in the kit." }
                }
                Accordion { title: "Can I nest content?", open: true,
                    Rating { value: 4, readonly: true, show_label: false }
                }
            }

            section { class: "gallery-section",
                h2 { "Toasts" }
                div { class: "gallery-toast-buttons",
                    for (kind, name) in ALL_TOAST_KINDS.iter().map(|k| (*k, k.as_str())) {
                        button {
                            key: "{name}",
                            r#type: "button",
                            onclick: move |_| raise(kind, format!("This is a {name} toast")),
                            "{name}"
                        }
                    }
                }
            }

            ToastRegion {
                for toast in toasts.read().iter().cloned() {
                    Toast {
                        key: "{toast.id}",
                        message: toast.message.clone(),
                        kind: toast.kind,
                        duration: settings.toast.duration_ms,
                        timings: settings.toast.timings(),
                        ontoast_close: move |_| tracing::debug!(id = toast.id, "toast closed"),
                        ondetached: move |_| toasts.write().retain(|t| t.id != toast.id),
                    }
                }
            }
        }
    }
}
