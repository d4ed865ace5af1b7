use pretty_assertions::assert_eq;
use std::time::Duration;
use widget_types::{RatingState, ToastLifecycle, WidgetConfig, WidgetErrorKind};

#[test]
fn configured_timings_drive_the_toast() {
    let config = WidgetConfig::from_toml_str(
        r#"
        [toast]
        duration_ms = 1500
        enter_delay_ms = 0
        "#,
    )
    .unwrap();
    let lifecycle =
        ToastLifecycle::new(config.toast.duration()).with_timings(config.toast.timings());
    assert_eq!(lifecycle.duration(), Duration::from_millis(1500));
    assert_eq!(config.toast.timings().enter_delay, Duration::ZERO);
    assert_eq!(config.toast.timings().detach_delay, Duration::from_millis(300));
}

#[test]
fn configured_scale_drives_the_rating() {
    let config = WidgetConfig::from_toml_str("[rating]\nmax_rating = 10").unwrap();
    let state = RatingState::new(config.rating.max_rating).with_value(7);
    assert_eq!(state.label(), "7.0 / 10.0");
}

#[test]
fn malformed_file_reports_invalid_config() {
    let err = WidgetConfig::from_toml_str("[dropdown\nplaceholder = ").unwrap_err();
    assert_eq!(err.kind, WidgetErrorKind::InvalidConfig);
    assert!(err.to_string().starts_with("InvalidConfig: "));
}
