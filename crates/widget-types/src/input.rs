/// Keyboard keys the widgets react to.
///
/// Hosts translate their native key events into this enum; anything the
/// widgets do not handle maps to [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Tab,
    Other,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Tab" => Key::Tab,
            _ => Key::Other,
        }
    }

    /// Enter and Space both trigger a control's primary action.
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}
