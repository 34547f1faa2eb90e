//! Photo pane — passport photo preview drawn with half-block characters.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::PhotoFile;
use crate::photo::{PreviewImage, Thumbnail};

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: &str = "\u{2580}";

/// Everything the photo pane needs to render.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhotoPaneContext<'a> {
    /// The file reference stored in the record.
    pub file: Option<&'a PhotoFile>,
    /// The latest published preview.
    pub preview: Option<&'a PreviewImage>,
    pub pending: bool,
    pub warning: Option<&'a str>,
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

/// Converts a thumbnail into terminal lines, two pixel rows per line.
///
/// An odd last row leaves the lower half with the default background.
pub fn thumbnail_lines(thumb: &Thumbnail) -> Vec<Line<'static>> {
    (0..thumb.height)
        .step_by(2)
        .map(|y| {
            let spans: Vec<Span<'static>> = (0..thumb.width)
                .map(|x| {
                    let mut style = Style::default();
                    if let Some(top) = thumb.pixel(x, y) {
                        style = style.fg(rgb(top));
                    }
                    if let Some(bottom) = thumb.pixel(x, y + 1) {
                        style = style.bg(rgb(bottom));
                    }
                    Span::styled(HALF_BLOCK, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Formats a byte count as `B`, `KiB` or `MiB`.
pub fn human_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KIB {
        format!("{bytes} B")
    } else if b < KIB * KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{:.1} MiB", b / (KIB * KIB))
    }
}

/// Lines shown under the picture: file name, type, size and status.
pub fn caption_lines(ctx: &PhotoPaneContext<'_>) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    match ctx.file {
        Some(file) => lines.push(Line::from(Span::styled(
            file.name.clone(),
            Style::default().fg(Color::White),
        ))),
        None => lines.push(Line::from(Span::styled("No photo selected", dim))),
    }

    if ctx.pending {
        lines.push(Line::from(Span::styled(
            "Loading preview…",
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(preview) = ctx.preview {
        lines.push(Line::from(Span::styled(
            format!("{}, {}", preview.mime, human_size(preview.byte_len)),
            dim,
        )));
    }

    if let Some(warning) = ctx.warning {
        lines.push(Line::from(Span::styled(
            warning.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    lines.push(Line::from(Span::styled("Ctrl+O: Upload Photo", dim)));
    lines
}

/// Renders the photo pane.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_photo_pane(ctx: &PhotoPaneContext<'_>, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Passport Photo * ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let captions = caption_lines(ctx);
    let [picture_area, caption_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(captions.len() as u16),
    ])
    .areas(inner);

    let picture = match ctx.preview.and_then(|p| p.thumbnail.as_ref()) {
        Some(thumb) if !ctx.pending => Paragraph::new(thumbnail_lines(thumb)),
        _ => Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "\u{2191} Upload",
                Style::default().fg(Color::Cyan),
            )),
        ]),
    };
    frame.render_widget(picture.alignment(Alignment::Center), picture_area);

    frame.render_widget(
        Paragraph::new(captions).wrap(Wrap { trim: true }),
        caption_area,
    );
}
