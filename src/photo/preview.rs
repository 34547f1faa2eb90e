use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::imageops::FilterType;

/// Largest thumbnail width in pixels (one pixel per terminal column).
pub const THUMBNAIL_MAX_WIDTH: u32 = 48;
/// Largest thumbnail height in pixels (two pixels per terminal row).
pub const THUMBNAIL_MAX_HEIGHT: u32 = 48;

/// A small RGB bitmap of the photo for painting in the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    /// Row-major RGB triples.
    pub rgb: Vec<u8>,
}

impl Thumbnail {
    /// Returns the colour at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 3) as usize;
        self.rgb.get(i..i + 3).map(|p| [p[0], p[1], p[2]])
    }
}

/// A self-contained, displayable encoding of a photo's bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewImage {
    /// `data:<mime>;base64,<payload>`
    pub data_uri: String,
    pub mime: String,
    pub byte_len: usize,
    /// `None` when the bytes are not a decodable image.
    pub thumbnail: Option<Thumbnail>,
}

/// Guesses the MIME type from the file extension, falling back to
/// `application/octet-stream`.
pub fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Returns `true` if the extension maps to an `image/*` type.
pub fn is_image(path: &Path) -> bool {
    mime_guess::from_path(path)
        .first()
        .is_some_and(|mime| mime.type_() == mime_guess::mime::IMAGE)
}

/// Encodes `bytes` as a base64 data URI.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Decodes `bytes` and shrinks the image to fit the thumbnail box.
///
/// Images already inside the box keep their size.
pub fn build_thumbnail(bytes: &[u8], max_width: u32, max_height: u32) -> Option<Thumbnail> {
    let source = image::load_from_memory(bytes).ok()?.to_rgb8();
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let x_scale = max_width as f32 / width as f32;
    let y_scale = max_height as f32 / height as f32;
    let scale = x_scale.min(y_scale).min(1.0);
    if scale >= 1.0 {
        return Some(Thumbnail {
            width,
            height,
            rgb: source.into_raw(),
        });
    }

    let target_width = (width as f32 * scale).round().max(1.0) as u32;
    let target_height = (height as f32 * scale).round().max(1.0) as u32;
    let resized = image::imageops::resize(&source, target_width, target_height, FilterType::Triangle);

    Some(Thumbnail {
        width: target_width,
        height: target_height,
        rgb: resized.into_raw(),
    })
}

/// Builds the full preview for a photo read from `path`.
pub fn render_preview(path: &Path, bytes: Vec<u8>) -> PreviewImage {
    let mime = guess_mime(path);
    let thumbnail = build_thumbnail(&bytes, THUMBNAIL_MAX_WIDTH, THUMBNAIL_MAX_HEIGHT);
    PreviewImage {
        data_uri: data_uri(&mime, &bytes),
        byte_len: bytes.len(),
        mime,
        thumbnail,
    }
}
