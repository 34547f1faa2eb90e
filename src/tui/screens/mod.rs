//! TUI screen implementations.

pub mod help;
pub mod photo_picker;
pub mod registration;

pub use help::{HelpState, draw_help};
pub use photo_picker::{PhotoPickerState, draw_photo_picker};
pub use registration::{RegistrationState, draw_registration};
