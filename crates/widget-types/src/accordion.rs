use crate::input::Key;

pub const DEFAULT_ACCORDION_TITLE: &str = "Accordion Title";

/// Open/closed state of a single accordion section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: bool,
}

impl AccordionState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the state and return the new one.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Enter and Space toggle; returns the new state when the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> Option<bool> {
        key.is_activation().then(|| self.toggle())
    }
}
