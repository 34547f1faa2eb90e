//! Reusable TUI widgets.

pub mod form;
pub mod photo;
pub mod status_bar;

pub use form::{FieldKind, Form, FormField, draw_form};
pub use photo::{PhotoPaneContext, draw_photo_pane};
pub use status_bar::{StatusBarContext, draw_status_bar};
