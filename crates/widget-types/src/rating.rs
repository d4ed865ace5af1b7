use serde::{Deserialize, Serialize};

use crate::input::Key;

pub const DEFAULT_MAX_RATING: u32 = 5;

/// Payload of the `rating-change` notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RatingChange {
    pub value: u32,
    pub old_value: u32,
}

/// What a key press on a star asks the host to do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarKeyOutcome {
    pub handled: bool,
    pub change: Option<RatingChange>,
    /// Star that should receive keyboard focus next.
    pub focus: Option<usize>,
}

/// Committed value plus hover preview of a star rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingState {
    value: u32,
    hover_value: u32,
    max_rating: u32,
    readonly: bool,
}

impl Default for RatingState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RATING)
    }
}

impl RatingState {
    pub fn new(max_rating: u32) -> Self {
        Self {
            value: 0,
            hover_value: 0,
            max_rating,
            readonly: false,
        }
    }

    /// Builder form of [`RatingState::set_value`].
    pub fn with_value(mut self, value: u32) -> Self {
        self.set_value(value);
        self
    }

    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn hover_value(&self) -> u32 {
        self.hover_value
    }

    pub fn max_rating(&self) -> u32 {
        self.max_rating
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Host-driven update; clamps to `max_rating` and emits nothing.
    pub fn set_value(&mut self, value: u32) {
        if value > self.max_rating {
            tracing::debug!(value, max = self.max_rating, "rating value clamped");
        }
        self.value = value.min(self.max_rating);
    }

    /// Shrinking the scale clamps both the value and the hover preview.
    pub fn set_max_rating(&mut self, max_rating: u32) {
        self.max_rating = max_rating;
        self.value = self.value.min(max_rating);
        self.hover_value = self.hover_value.min(max_rating);
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
        if readonly {
            self.hover_value = 0;
        }
    }

    /// Number of filled stars: the hover preview when present, else the value.
    pub fn display_value(&self) -> u32 {
        if self.hover_value != 0 {
            self.hover_value
        } else {
            self.value
        }
    }

    pub fn is_filled(&self, index: usize) -> bool {
        star_number(index) <= self.display_value()
    }

    /// `aria-checked` state of star `index`; ignores the hover preview.
    pub fn is_checked(&self, index: usize) -> bool {
        star_number(index) <= self.value
    }

    /// Text of the optional label, e.g. `"3.0 / 5.0"`.
    pub fn label(&self) -> String {
        format!(
            "{:.1} / {:.1}",
            self.display_value() as f64,
            self.max_rating as f64
        )
    }

    /// Commit star `index` (zero-based). Out-of-range indices clamp to the
    /// last star.
    pub fn click(&mut self, index: usize) -> Option<RatingChange> {
        if self.readonly || self.max_rating == 0 {
            return None;
        }
        let old_value = self.value;
        self.value = self.star_value(index);
        Some(RatingChange {
            value: self.value,
            old_value,
        })
    }

    pub fn hover(&mut self, index: usize) {
        if self.readonly || self.max_rating == 0 {
            return;
        }
        self.hover_value = self.star_value(index);
    }

    /// The pointer left the control.
    pub fn leave(&mut self) {
        if self.readonly {
            return;
        }
        self.hover_value = 0;
    }

    /// Key press while star `index` has focus.
    pub fn handle_key(&mut self, index: usize, key: Key) -> StarKeyOutcome {
        if self.readonly {
            return StarKeyOutcome::default();
        }
        let last = self.max_rating.saturating_sub(1) as usize;
        match key {
            Key::Enter | Key::Space => StarKeyOutcome {
                handled: true,
                change: self.click(index),
                focus: None,
            },
            Key::ArrowRight | Key::ArrowUp => StarKeyOutcome {
                handled: true,
                change: None,
                focus: (index < last).then_some(index + 1),
            },
            Key::ArrowLeft | Key::ArrowDown => StarKeyOutcome {
                handled: true,
                change: None,
                focus: (index > 0).then(|| index - 1),
            },
            _ => StarKeyOutcome::default(),
        }
    }

    fn star_value(&self, index: usize) -> u32 {
        let value = star_number(index);
        if value > self.max_rating {
            tracing::debug!(index, max = self.max_rating, "star index clamped");
        }
        value.min(self.max_rating)
    }
}

/// One-based star number of `index`, saturating at `u32::MAX`.
fn star_number(index: usize) -> u32 {
    u32::try_from(index.saturating_add(1)).unwrap_or(u32::MAX)
}

/// Accessible label of star `index`, e.g. `"1 star"`, `"3 stars"`.
pub fn star_label(index: usize) -> String {
    let count = index + 1;
    if count == 1 {
        "1 star".to_string()
    } else {
        format!("{count} stars")
    }
}
