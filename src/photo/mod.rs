//! Photo pipeline: selected file → asynchronous data-URI preview.
//!
//! The file reference lives in the record; the preview lives here and never
//! affects form validity.

mod error;
mod pipeline;
pub(crate) mod preview;

pub use error::PhotoError;
pub use pipeline::{PhotoPipeline, PreviewOutcome};
pub use preview::{
    PreviewImage, THUMBNAIL_MAX_HEIGHT, THUMBNAIL_MAX_WIDTH, Thumbnail, build_thumbnail, data_uri,
    guess_mime, is_image, render_preview,
};
