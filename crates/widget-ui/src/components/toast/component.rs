use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use widget_types::{
    TimerToken, ToastEffect, ToastKind, ToastLifecycle, ToastTimings, DEFAULT_TOAST_DURATION,
};

use crate::timer::sleep;

/// Fixed-position column that stacks toasts in the top-right corner.
#[component]
pub fn ToastRegion(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "toast-region", {children} }
    }
}

/// A transient notification that slides in, optionally dismisses itself
/// after `duration` milliseconds, and can be closed by the user.
///
/// The host owns the element: after `ontoast_close` fires and the exit
/// animation has had time to run, `ondetached` asks the host to remove it.
#[component]
pub fn Toast(
    #[props(default)] message: String,
    #[props(default)] kind: ToastKind,
    /// Auto-dismiss delay in milliseconds; `0` keeps the toast until closed.
    #[props(default = DEFAULT_TOAST_DURATION.as_millis() as u64)]
    duration: u64,
    #[props(default)] timings: Option<ToastTimings>,
    #[props(default)] ontoast_close: Option<EventHandler<()>>,
    #[props(default)] ondetached: Option<EventHandler<()>>,
) -> Element {
    let lifecycle = use_signal(|| {
        ToastLifecycle::new(Duration::from_millis(duration))
            .with_timings(timings.unwrap_or_default())
    });
    let task = use_signal(|| None::<(TimerToken, Task)>);
    let driver = ToastDriver {
        lifecycle,
        task,
        ontoast_close,
        ondetached,
    };

    use_effect(move || {
        let mut lifecycle = driver.lifecycle;
        let effects = lifecycle.write().mount();
        driver.apply(effects);
    });

    use_drop(move || {
        let mut lifecycle = driver.lifecycle;
        let mut task = driver.task;
        if let Ok(mut lifecycle) = lifecycle.try_write() {
            lifecycle.teardown();
        }
        if let Ok(mut task) = task.try_write() {
            if let Some((_, handle)) = task.take() {
                handle.cancel();
            }
        };
    });

    let (visible, detached) = {
        let current = lifecycle.read();
        (current.is_visible(), current.is_detached())
    };
    if detached {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: toast_class(kind, visible),
            role: "alert",
            "aria-live": "polite",
            "aria-atomic": "true",
            span { class: "toast-message", "{message}" }
            button {
                class: "toast-close",
                r#type: "button",
                "aria-label": "Close notification",
                onclick: move |_| {
                    let mut lifecycle = driver.lifecycle;
                    let effects = lifecycle.write().close();
                    driver.apply(effects);
                },
                "\u{00D7}"
            }
        }
    }
}

/// Executes lifecycle effects against the Dioxus runtime: timers become
/// scope-owned tasks, notifications become handler calls.
#[derive(Clone, Copy)]
struct ToastDriver {
    lifecycle: Signal<ToastLifecycle>,
    task: Signal<Option<(TimerToken, Task)>>,
    ontoast_close: Option<EventHandler<()>>,
    ondetached: Option<EventHandler<()>>,
}

impl ToastDriver {
    fn apply(mut self, effects: Vec<ToastEffect>) {
        for effect in effects {
            match effect {
                ToastEffect::Schedule {
                    token,
                    timer,
                    delay,
                } => {
                    tracing::debug!(?timer, ?delay, "toast timer scheduled");
                    let handle = spawn(async move {
                        sleep(delay).await;
                        let mut driver = self;
                        let effects = driver.lifecycle.write().fire(token);
                        driver.apply(effects);
                    });
                    self.task.set(Some((token, handle)));
                }
                ToastEffect::Cancel(token) => {
                    let pending = self.task.write().take();
                    if let Some((pending, handle)) = pending {
                        if pending == token {
                            handle.cancel();
                        }
                    }
                }
                ToastEffect::Closed => {
                    tracing::debug!("toast closed");
                    if let Some(handler) = &self.ontoast_close {
                        handler.call(());
                    }
                }
                ToastEffect::Detach => {
                    if let Some(handler) = &self.ondetached {
                        handler.call(());
                    }
                }
            }
        }
    }
}

fn toast_class(kind: ToastKind, visible: bool) -> String {
    if visible {
        format!("toast {} visible", kind.as_str())
    } else {
        format!("toast {}", kind.as_str())
    }
}
