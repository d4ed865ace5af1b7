use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::dropdown::{DropdownOption, DEFAULT_PLACEHOLDER};
use crate::error::WidgetError;
use crate::rating::DEFAULT_MAX_RATING;
use crate::toast::{ToastTimings, DEFAULT_DETACH_DELAY, DEFAULT_ENTER_DELAY, DEFAULT_TOAST_DURATION};

/// Host-wide defaults for the dropdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DropdownDefaults {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for DropdownDefaults {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

/// Host-wide defaults for the star rating.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatingDefaults {
    #[serde(default = "default_max_rating")]
    pub max_rating: u32,
    #[serde(default = "default_true")]
    pub show_label: bool,
}

impl Default for RatingDefaults {
    fn default() -> Self {
        Self {
            max_rating: default_max_rating(),
            show_label: true,
        }
    }
}

/// Host-wide toast timings, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastDefaults {
    /// `0` disables auto-dismiss.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default = "default_enter_delay_ms")]
    pub enter_delay_ms: u64,
    #[serde(default = "default_detach_delay_ms")]
    pub detach_delay_ms: u64,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            enter_delay_ms: default_enter_delay_ms(),
            detach_delay_ms: default_detach_delay_ms(),
        }
    }
}

impl ToastDefaults {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn timings(&self) -> ToastTimings {
        ToastTimings {
            enter_delay: Duration::from_millis(self.enter_delay_ms),
            detach_delay: Duration::from_millis(self.detach_delay_ms),
        }
    }
}

/// Demo content for the gallery page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GallerySettings {
    #[serde(default)]
    pub options: Vec<DropdownOption>,
}

/// Top-level config file structure.
///
/// Every field has a default so a missing or partial file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WidgetConfig {
    #[serde(default)]
    pub dropdown: DropdownDefaults,
    #[serde(default)]
    pub rating: RatingDefaults,
    #[serde(default)]
    pub toast: ToastDefaults,
    #[serde(default)]
    pub gallery: GallerySettings,
}

impl WidgetConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, WidgetError> {
        let config: WidgetConfig = toml::from_str(contents)?;
        if config.rating.max_rating == 0 {
            return Err(WidgetError::invalid_config(
                "rating.max_rating must be at least 1",
            ));
        }
        Ok(config)
    }
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_max_rating() -> u32 {
    DEFAULT_MAX_RATING
}

fn default_true() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION.as_millis() as u64
}

fn default_enter_delay_ms() -> u64 {
    DEFAULT_ENTER_DELAY.as_millis() as u64
}

fn default_detach_delay_ms() -> u64 {
    DEFAULT_DETACH_DELAY.as_millis() as u64
}
