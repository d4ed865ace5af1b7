pub mod components;
pub mod timer;

pub use components::*;
pub use widget_types;
