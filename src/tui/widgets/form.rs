//! Reusable form widget: a grid of labelled inputs with focus management.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Field, is_required};

/// Height of a single-line input including its border.
const ROW_HEIGHT: u16 = 3;
/// Minimum height of a row holding a multi-line input.
const MULTILINE_MIN_HEIGHT: u16 = 5;

/// How a field is edited and drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free single-line text.
    Text,
    /// One of a fixed list of options, cycled with ←/→.
    Choice,
    /// Multi-line text; drawn by the owning screen into the area from
    /// [`draw_form`].
    Multiline,
}

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label shown in the border.
    pub label: String,
    /// Record field this input edits.
    pub key: Field,
    pub kind: FieldKind,
    /// Text currently displayed.
    pub value: String,
    /// Whether the field counts towards the validity gate.
    pub required: bool,
}

impl FormField {
    /// Creates an empty field labelled after `key`.
    pub fn new(key: Field, kind: FieldKind) -> Self {
        Self {
            label: key.label().to_string(),
            key,
            kind,
            value: String::new(),
            required: is_required(key),
        }
    }
}

/// Fields laid out in rows, with a single focused field.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    row_sizes: Vec<usize>,
    focus: usize,
}

impl Form {
    /// Creates a form from rows of fields. Focus starts on the first field.
    pub fn new(rows: Vec<Vec<FormField>>) -> Self {
        let row_sizes = rows.iter().map(Vec::len).filter(|&n| n > 0).collect();
        let fields = rows.into_iter().flatten().collect();
        Self {
            fields,
            row_sizes,
            focus: 0,
        }
    }

    /// Returns the index of the currently focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the focused field, if the form has any fields.
    pub fn focused(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Focuses the field editing `key`. No-op if no such field exists.
    pub fn set_focus(&mut self, key: Field) {
        if let Some(index) = self.index_of(key) {
            self.focus = index;
        }
    }

    /// Returns the index of the field editing `key`.
    pub fn index_of(&self, key: Field) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }

    /// Sets the displayed value of the field editing `key`.
    pub fn set_value(&mut self, key: Field, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.key == key) {
            field.value = value.into();
        }
    }

    /// Returns the displayed value for `key`, or an empty string if absent.
    pub fn value(&self, key: Field) -> &str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Returns a reference to the fields in focus order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Splits `area` into one rectangle per field, in focus order.
    pub fn field_areas(&self, area: Rect) -> Vec<Rect> {
        let mut constraints = Vec::with_capacity(self.row_sizes.len());
        let mut start = 0;
        for &size in &self.row_sizes {
            let multiline = self.fields[start..start + size]
                .iter()
                .any(|f| f.kind == FieldKind::Multiline);
            constraints.push(if multiline {
                Constraint::Min(MULTILINE_MIN_HEIGHT)
            } else {
                Constraint::Length(ROW_HEIGHT)
            });
            start += size;
        }

        let rows = Layout::vertical(constraints).split(area);
        rows.iter()
            .zip(&self.row_sizes)
            .flat_map(|(row, &size)| {
                Layout::horizontal(vec![Constraint::Fill(1); size])
                    .spacing(1)
                    .split(*row)
                    .to_vec()
            })
            .collect()
    }
}

/// Returns the border colour for a field.
fn border_color(is_focused: bool) -> Color {
    if is_focused {
        Color::Yellow
    } else {
        Color::DarkGray
    }
}

/// Builds the bordered block for a field, marking required fields with `*`.
pub fn field_block(field: &FormField, is_focused: bool) -> Block<'static> {
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    };
    Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(is_focused)))
}

/// Renders every single-line field and returns the area of each field.
///
/// [`FieldKind::Multiline`] fields only get their area reserved; the caller
/// draws them.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) -> Vec<Rect> {
    let areas = form.field_areas(area);

    for (i, (field, field_area)) in form.fields.iter().zip(&areas).enumerate() {
        if field.kind == FieldKind::Multiline {
            continue;
        }
        let is_focused = i == form.focus;
        let block = field_block(field, is_focused);

        let spans = match field.kind {
            FieldKind::Choice if is_focused => vec![
                Span::styled("◀ ", Style::default().fg(Color::Yellow)),
                Span::raw(field.value.as_str()),
                Span::styled(" ▶", Style::default().fg(Color::Yellow)),
            ],
            _ if is_focused => vec![
                Span::raw(field.value.as_str()),
                Span::styled(
                    "\u{2588}",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ),
            ],
            _ => vec![Span::raw(field.value.as_str())],
        };

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, *field_area);
    }

    areas
}
