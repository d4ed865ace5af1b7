use chrono::NaiveDate;
use dioxus::prelude::*;
use widget_types::input::Key as WidgetKey;
use widget_types::{DayCell, DaySelected, MonthCursor, WEEKDAY_NAMES};

/// A month view with previous/next navigation and selectable days.
#[component]
pub fn Calendar(
    /// Date highlighted as today. Defaults to the local date.
    #[props(default)]
    today: Option<NaiveDate>,
    /// Initially displayed month, zero-based. Defaults to today's month.
    #[props(default)]
    month: Option<u32>,
    /// Initially displayed year. Defaults to today's year.
    #[props(default)]
    year: Option<i32>,
    #[props(default)] onday_selected: Option<EventHandler<DaySelected>>,
) -> Element {
    let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut cursor = use_signal(move || {
        let base = MonthCursor::containing(today);
        MonthCursor::new(month.unwrap_or(base.month()), year.unwrap_or(base.year()))
    });

    let select = move |day: u32| {
        let Some(selected) = cursor.peek().select_day(day) else {
            return;
        };
        tracing::debug!(date = %selected.date, "calendar day selected");
        if let Some(handler) = &onday_selected {
            handler.call(selected);
        }
    };

    let current = *cursor.read();
    let title = current.title();
    let cells = current.day_cells(today);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "calendar", role: "application", "aria-label": "Calendar",
            div { class: "calendar-header",
                button {
                    r#type: "button",
                    "aria-label": "Previous month",
                    onclick: move |_| cursor.write().previous_month(),
                    "\u{2190} Prev"
                }
                div { class: "calendar-month-year", "aria-live": "polite", "{title}" }
                button {
                    r#type: "button",
                    "aria-label": "Next month",
                    onclick: move |_| cursor.write().next_month(),
                    "Next \u{2192}"
                }
            }
            div { class: "calendar-grid", role: "grid",
                for name in WEEKDAY_NAMES {
                    div { key: "{name}", class: "calendar-day-name", role: "columnheader", "{name}" }
                }
                {cells.into_iter().enumerate().map(move |(i, cell)| match cell {
                    DayCell::Empty => rsx! {
                        div { key: "empty-{i}", class: "calendar-day empty", "aria-hidden": "true" }
                    },
                    DayCell::Day { day, is_today } => rsx! {
                        div {
                            key: "day-{day}",
                            class: if is_today { "calendar-day today" } else { "calendar-day" },
                            role: "button",
                            tabindex: "0",
                            "aria-label": current.day_label(day, is_today),
                            onclick: move |_| select(day),
                            onkeydown: move |evt: KeyboardEvent| {
                                if WidgetKey::from_dom(&evt.key().to_string()).is_activation() {
                                    evt.prevent_default();
                                    select(day);
                                }
                            },
                            "{day}"
                        }
                    },
                })}
            }
        }
    }
}
