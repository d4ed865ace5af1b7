use dioxus::prelude::*;
use widget_types::input::Key as WidgetKey;
use widget_types::{AccordionState, DEFAULT_ACCORDION_TITLE};

/// A single collapsible section with a clickable header.
#[component]
pub fn Accordion(
    #[props(default = DEFAULT_ACCORDION_TITLE.to_string())] title: String,
    /// Initial state; later changes are owned by the accordion.
    #[props(default = false)]
    open: bool,
    /// Called with the new state after every toggle.
    #[props(default)]
    ontoggle: Option<EventHandler<bool>>,
    children: Element,
) -> Element {
    let mut state = use_signal(|| AccordionState::new(open));
    let is_open = state.read().is_open();

    let notify = move |toggled: Option<bool>| {
        if let (Some(open), Some(handler)) = (toggled, &ontoggle) {
            handler.call(open);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "accordion",
            div {
                class: "accordion-header",
                role: "button",
                tabindex: "0",
                "aria-expanded": is_open.to_string(),
                onclick: move |_| {
                    let open = state.write().toggle();
                    notify(Some(open));
                },
                onkeydown: move |evt: KeyboardEvent| {
                    let toggled = state.write().handle_key(WidgetKey::from_dom(&evt.key().to_string()));
                    if toggled.is_some() {
                        evt.prevent_default();
                    }
                    notify(toggled);
                },
                h3 { class: "accordion-title", "{title}" }
                svg {
                    class: if is_open { "accordion-chevron open" } else { "accordion-chevron" },
                    "aria-hidden": "true",
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    path { d: "M6 9l6 6 6-6" }
                }
            }
            div {
                class: if is_open { "accordion-content open" } else { "accordion-content" },
                role: "region",
                div { class: "accordion-body", {children} }
            }
        }
    }
}
