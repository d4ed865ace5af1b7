use serde::{Deserialize, Serialize};

use crate::error::WidgetError;
use crate::input::Key;

/// Placeholder shown when no option is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Select an option";

/// One entry of a dropdown list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Parse a JSON array of `{"value": .., "label": ..}` objects.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, WidgetError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Payload of the `change` notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DropdownChange {
    pub value: String,
    pub label: String,
}

impl From<&DropdownOption> for DropdownChange {
    fn from(option: &DropdownOption) -> Self {
        Self {
            value: option.value.clone(),
            label: option.label.clone(),
        }
    }
}

/// Result of feeding a key press to the dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// The key was consumed; hosts should suppress its default action.
    pub handled: bool,
    /// Set when the key committed a selection.
    pub change: Option<DropdownChange>,
}

impl KeyOutcome {
    fn ignored() -> Self {
        Self::default()
    }

    fn consumed() -> Self {
        Self {
            handled: true,
            change: None,
        }
    }

    fn committed(change: Option<DropdownChange>) -> Self {
        Self {
            handled: true,
            change,
        }
    }
}

/// Session state of a select dropdown.
///
/// `focused_index` is only `Some` while the list is open; every close path
/// resets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropdownState {
    options: Vec<DropdownOption>,
    selected_value: Option<String>,
    is_open: bool,
    focused_index: Option<usize>,
    disabled: bool,
}

impl DropdownState {
    pub fn new(options: Vec<DropdownOption>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Builder form of [`DropdownState::set_value`].
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Builder form of [`DropdownState::set_disabled`].
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    pub fn options(&self) -> &[DropdownOption] {
        &self.options
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected_value.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused_index
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Replace the committed value from the host. An empty string unsets it.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.selected_value = if value.is_empty() { None } else { Some(value) };
    }

    /// Replace the option list. The list is closed because the cursor
    /// would otherwise point into the old list.
    pub fn set_options(&mut self, options: Vec<DropdownOption>) {
        self.options = options;
        self.close();
    }

    /// Entering disabled mode closes an open list.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.close();
        }
    }

    /// Index of the committed value within `options`, if present.
    pub fn selected_index(&self) -> Option<usize> {
        let value = self.selected_value.as_deref()?;
        self.options.iter().position(|opt| opt.value == value)
    }

    /// Label to display on the control: the selected option's label, or the
    /// placeholder when the value is unset or not among the options.
    pub fn display_label<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.selected_index()
            .map(|i| self.options[i].label.as_str())
            .unwrap_or(placeholder)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index() == Some(index)
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused_index == Some(index)
    }

    /// Pointer activation of the control: opens a closed list, closes an
    /// open one.
    pub fn toggle(&mut self) {
        if self.disabled {
            return;
        }
        if self.is_open {
            self.close();
        } else {
            self.open_with(self.selected_index());
        }
    }

    /// Commit option `index`. Out-of-range indices clamp to the last option.
    pub fn select(&mut self, index: usize) -> Option<DropdownChange> {
        if self.disabled || !self.is_open || self.options.is_empty() {
            return None;
        }
        let last = self.options.len() - 1;
        if index > last {
            tracing::debug!(index, last, "dropdown select index clamped");
        }
        let option = &self.options[index.min(last)];
        let change = DropdownChange::from(option);
        self.selected_value = Some(change.value.clone());
        self.close();
        Some(change)
    }

    /// Pointer hover over option `index` moves the cursor without committing.
    pub fn hover(&mut self, index: usize) {
        if self.disabled || !self.is_open || index >= self.options.len() {
            return;
        }
        self.focused_index = Some(index);
    }

    /// An activation landed outside the widget.
    pub fn outside_click(&mut self) {
        if self.disabled {
            return;
        }
        self.close();
    }

    pub fn focus_next(&mut self) {
        if self.disabled || !self.is_open || self.options.is_empty() {
            return;
        }
        let last = self.options.len() - 1;
        self.focused_index = Some(match self.focused_index {
            Some(i) => (i + 1).min(last),
            None => 0,
        });
    }

    pub fn focus_previous(&mut self) {
        if self.disabled || !self.is_open || self.options.is_empty() {
            return;
        }
        self.focused_index = Some(self.focused_index.map_or(0, |i| i.saturating_sub(1)));
    }

    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if self.disabled {
            return KeyOutcome::ignored();
        }
        match key {
            Key::Enter | Key::Space => match (self.is_open, self.focused_index) {
                (true, Some(i)) => KeyOutcome::committed(self.select(i)),
                _ => {
                    self.toggle();
                    KeyOutcome::consumed()
                }
            },
            // Neither is consumed: the browser keeps its own Escape handling
            // and Tab still moves focus away.
            Key::Escape | Key::Tab => {
                self.close();
                KeyOutcome::ignored()
            }
            Key::ArrowDown => {
                if self.is_open {
                    self.focus_next();
                } else {
                    let entry = if self.options.is_empty() {
                        None
                    } else {
                        Some(self.selected_index().unwrap_or(0))
                    };
                    self.open_with(entry);
                }
                KeyOutcome::consumed()
            }
            Key::ArrowUp => {
                self.focus_previous();
                KeyOutcome::consumed()
            }
            _ => KeyOutcome::ignored(),
        }
    }

    fn open_with(&mut self, focus: Option<usize>) {
        self.is_open = true;
        self.focused_index = focus;
    }

    fn close(&mut self) {
        self.is_open = false;
        self.focused_index = None;
    }
}
