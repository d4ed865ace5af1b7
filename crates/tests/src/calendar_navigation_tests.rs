use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use widget_types::{DayCell, MonthCursor};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn previous_from_january_wraps_to_december() {
    let mut cursor = MonthCursor::new(0, 2025);
    cursor.previous_month();
    assert_eq!(cursor.title(), "December 2024");
}

#[test]
fn next_from_december_wraps_to_january() {
    let mut cursor = MonthCursor::new(11, 2025);
    cursor.next_month();
    assert_eq!((cursor.month(), cursor.year()), (0, 2026));
}

#[test]
fn twelve_steps_return_to_start() {
    let start = MonthCursor::new(4, 2026);
    let mut cursor = start;
    for _ in 0..12 {
        cursor.next_month();
    }
    assert_eq!(cursor.title(), "May 2027");
    for _ in 0..12 {
        cursor.previous_month();
    }
    assert_eq!(cursor, start);
}

#[test]
fn leap_years_have_twenty_nine_february_days() {
    assert_eq!(MonthCursor::new(1, 2024).days_in_month(), 29);
    assert_eq!(MonthCursor::new(1, 2025).days_in_month(), 28);
    assert_eq!(MonthCursor::new(1, 2000).days_in_month(), 29);
    assert_eq!(MonthCursor::new(1, 1900).days_in_month(), 28);
}

#[test]
fn grid_pads_to_first_weekday() {
    // 1 June 2025 was a Sunday, 1 March 2025 a Saturday.
    let june = MonthCursor::new(5, 2025).day_cells(date(2025, 1, 1));
    assert_eq!(june[0], DayCell::Day { day: 1, is_today: false });
    assert_eq!(june.len(), 30);

    let march = MonthCursor::new(2, 2025).day_cells(date(2025, 1, 1));
    assert!(march[..6].iter().all(|c| *c == DayCell::Empty));
    assert_eq!(march.len(), 6 + 31);
}

#[test]
fn today_is_highlighted_only_in_its_month() {
    let today = date(2026, 10, 19);
    let mut cursor = MonthCursor::containing(today);
    let highlighted = cursor
        .day_cells(today)
        .into_iter()
        .filter(|c| matches!(c, DayCell::Day { is_today: true, .. }))
        .count();
    assert_eq!(highlighted, 1);

    cursor.next_month();
    cursor.previous_month();
    cursor.previous_month();
    assert!(cursor
        .day_cells(today)
        .iter()
        .all(|c| !matches!(c, DayCell::Day { is_today: true, .. })));
}

#[test]
fn selecting_a_day_reports_zero_based_month() {
    let selected = MonthCursor::new(2, 2026).select_day(5).unwrap();
    assert_eq!(selected.month, 2);
    assert_eq!(selected.date, date(2026, 3, 5));
    assert!(MonthCursor::new(1, 2026).select_day(30).is_none());
}

#[test]
fn day_selected_serializes_with_iso_date() {
    let selected = MonthCursor::new(0, 2026).select_day(9).unwrap();
    let json = serde_json::to_value(&selected).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"day": 9, "month": 0, "year": 2026, "date": "2026-01-09"})
    );
}
