use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Column headers of the day grid, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Payload of the `day-selected` notification. `month` is zero-based.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaySelected {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub date: NaiveDate,
}

/// One cell of the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Padding before the first of the month.
    Empty,
    Day { day: u32, is_today: bool },
}

/// The month currently displayed by a calendar.
///
/// `month` is zero-based (`0` = January) and always within `0..=11`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    month: u32,
    year: i32,
}

impl MonthCursor {
    /// Out-of-range months clamp to December.
    pub fn new(month: u32, year: i32) -> Self {
        Self {
            month: month.min(11),
            year,
        }
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            month: date.month0(),
            year: date.year(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    /// Heading text, e.g. `"March 2026"`.
    pub fn title(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    /// Stays put at the first representable month.
    pub fn previous_month(&mut self) {
        if self.month == 0 {
            let Some(year) = self.year.checked_sub(1) else {
                tracing::debug!(year = self.year, "calendar cannot move before year");
                return;
            };
            self.month = 11;
            self.year = year;
        } else {
            self.month -= 1;
        }
    }

    /// Stays put at the last representable month.
    pub fn next_month(&mut self) {
        if self.month == 11 {
            let Some(year) = self.year.checked_add(1) else {
                tracing::debug!(year = self.year, "calendar cannot move past year");
                return;
            };
            self.month = 0;
            self.year = year;
        } else {
            self.month += 1;
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        let Some(first) = self.first_day() else {
            return 0;
        };
        self.successor()
            .first_day()
            .map(|next_first| next_first.signed_duration_since(first).num_days() as u32)
            .unwrap_or(31)
    }

    /// Weekday of the first of the month, `0` = Sunday.
    pub fn first_weekday(&self) -> u32 {
        self.first_day()
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Left padding followed by one cell per day. The cell equal to `today`
    /// is highlighted only when `today` falls in this month.
    pub fn day_cells(&self, today: NaiveDate) -> Vec<DayCell> {
        let today_here = today.month0() == self.month && today.year() == self.year;
        let padding = self.first_weekday() as usize;
        let days = self.days_in_month();

        let mut cells = Vec::with_capacity(padding + days as usize);
        cells.extend(std::iter::repeat(DayCell::Empty).take(padding));
        cells.extend((1..=days).map(|day| DayCell::Day {
            day,
            is_today: today_here && today.day() == day,
        }));
        cells
    }

    /// Accessible label of a day cell, e.g. `"5 March, 2026, today"`.
    pub fn day_label(&self, day: u32, is_today: bool) -> String {
        let suffix = if is_today { ", today" } else { "" };
        format!("{day} {}, {}{suffix}", self.month_name(), self.year)
    }

    /// Build the notification for activating `day`. Days outside the month
    /// produce nothing.
    pub fn select_day(&self, day: u32) -> Option<DaySelected> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month + 1, day)?;
        Some(DaySelected {
            day,
            month: self.month,
            year: self.year,
            date,
        })
    }

    fn successor(mut self) -> Self {
        self.next_month();
        self
    }
}
