pub mod accordion;
pub mod calendar;
pub mod rating;
pub mod select_dropdown;
pub mod toast;

// Re-exports for convenience
pub use accordion::*;
pub use calendar::*;
pub use rating::*;
pub use select_dropdown::*;
pub use toast::*;
