use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of widget configuration errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WidgetErrorKind {
    /// An options list could not be parsed.
    InvalidOptions,
    /// A configuration file could not be parsed.
    InvalidConfig,
}

impl fmt::Display for WidgetErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetErrorKind::InvalidOptions => write!(f, "InvalidOptions"),
            WidgetErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
        }
    }
}

/// Error raised at the fallible edges of the widgets: parsing host-supplied
/// option lists and configuration files.
///
/// Widget transitions themselves never fail; they clamp or ignore instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WidgetError {
    pub kind: WidgetErrorKind,
    pub message: String,
}

impl WidgetError {
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self {
            kind: WidgetErrorKind::InvalidOptions,
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: WidgetErrorKind::InvalidConfig,
            message: message.into(),
        }
    }
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for WidgetError {}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        WidgetError::invalid_options(err.to_string())
    }
}

impl From<toml::de::Error> for WidgetError {
    fn from(err: toml::de::Error) -> Self {
        WidgetError::invalid_config(err.message().to_string())
    }
}
