pub mod config;
pub mod error;
pub mod input;
pub mod timer;

// Widget state machines
pub mod accordion;
pub mod calendar;
pub mod dropdown;
pub mod rating;
pub mod toast;

pub use config::*;
pub use error::*;
pub use input::*;
pub use timer::*;

pub use accordion::*;
pub use calendar::*;
pub use dropdown::*;
pub use rating::*;
pub use toast::*;
