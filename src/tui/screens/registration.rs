//! Registration screen — the student registration form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_textarea::TextArea;

use crate::model::{
    CountryCode, Field, Gender, PhotoFile, RegistrationForm, RegistrationRecord, parse_birthday,
};
use crate::photo::PhotoPipeline;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;
use crate::tui::widgets::form::{FieldKind, Form, FormField, draw_form, field_block};
use crate::tui::widgets::photo::{PhotoPaneContext, draw_photo_pane};
use crate::tui::widgets::status_bar::{StatusBarContext, draw_status_bar};

/// Longest accepted birthday input (`YYYY-MM-DD`).
const BIRTHDAY_LEN: usize = 10;

/// Stored values the gender selector cycles through; `""` is the placeholder.
static GENDER_OPTIONS: &[&str] = &["", "male", "female"];

/// State for the registration screen.
#[derive(Debug, Clone)]
pub struct RegistrationState {
    form: RegistrationForm,
    layout: Form,
    notes: TextArea<'static>,
    /// Birthday as typed; the record only holds it once it is a full date.
    birthday_draft: String,
    notice: Option<String>,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationState {
    /// Creates the screen with an empty record.
    pub fn new() -> Self {
        let text = |key| FormField::new(key, FieldKind::Text);
        let layout = Form::new(vec![
            vec![
                text(Field::Surname),
                text(Field::Firstname),
                text(Field::OtherName),
            ],
            vec![
                text(Field::Birthday),
                FormField::new(Field::Gender, FieldKind::Choice),
            ],
            vec![
                FormField::new(Field::CountryCode, FieldKind::Choice),
                text(Field::PhoneNumber),
                text(Field::Address),
            ],
            vec![
                text(Field::Occupation),
                text(Field::CourseOfStudy),
                text(Field::StateOfOrigin),
            ],
            vec![FormField::new(Field::AdditionalInfo, FieldKind::Multiline)],
        ]);

        let mut state = Self {
            form: RegistrationForm::new(),
            layout,
            notes: TextArea::default(),
            birthday_draft: String::new(),
            notice: None,
        };
        state.sync();
        state
    }

    /// Returns the form state holder.
    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// Returns the current record.
    pub fn record(&self) -> &RegistrationRecord {
        self.form.record()
    }

    /// Returns the field layout for rendering.
    pub fn layout(&self) -> &Form {
        &self.layout
    }

    /// Returns the transient notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Stores the selected photo in the record.
    pub fn attach_photo(&mut self, photo: PhotoFile) {
        self.notice = None;
        self.form.attach_photo(photo);
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('o') => Action::Navigate(Screen::PhotoPicker),
                KeyCode::Char('c') => Action::Quit,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Tab => {
                self.layout.focus_next();
                return Action::None;
            }
            KeyCode::BackTab => {
                self.layout.focus_prev();
                return Action::None;
            }
            KeyCode::Esc => return Action::Quit,
            _ => {}
        }

        let Some(focused) = self.layout.focused() else {
            return Action::None;
        };
        let (key_field, kind) = (focused.key, focused.kind);

        match kind {
            FieldKind::Multiline => self.edit_notes(key),
            FieldKind::Choice => self.edit_choice(key_field, key.code),
            FieldKind::Text => self.edit_text(key_field, key.code),
        }
    }

    /// Hands the record off if the form is valid; otherwise does nothing.
    fn submit(&mut self) -> Action {
        match self.form.submit() {
            Some(record) => {
                self.notice = Some("Registration submitted".to_string());
                Action::Submit(record)
            }
            None => Action::None,
        }
    }

    fn edit_text(&mut self, field: Field, code: KeyCode) -> Action {
        let current = match field {
            Field::Birthday => self.birthday_draft.clone(),
            _ => self.form.record().value(field).to_string(),
        };
        let next = match code {
            KeyCode::Char(ch) if accepts(field, &current, ch) => format!("{current}{ch}"),
            KeyCode::Backspace => {
                let mut s = current;
                s.pop();
                s
            }
            KeyCode::Enter => return self.submit(),
            _ => return Action::None,
        };
        if field == Field::Birthday {
            self.set_birthday(next);
        } else {
            self.apply(field, &next);
        }
        Action::None
    }

    /// Stores the typed birthday; the record gets `""` until it parses.
    fn set_birthday(&mut self, draft: String) {
        let committed = match parse_birthday(&draft) {
            Some(_) => draft.clone(),
            None => String::new(),
        };
        self.birthday_draft = draft;
        self.apply(Field::Birthday, &committed);
    }

    fn edit_choice(&mut self, field: Field, code: KeyCode) -> Action {
        let forward = match code {
            KeyCode::Right | KeyCode::Char(' ') => true,
            KeyCode::Left => false,
            KeyCode::Enter => return self.submit(),
            _ => return Action::None,
        };
        let current = self.form.record().value(field);
        let next = match field {
            Field::Gender => cycle(GENDER_OPTIONS, current, forward),
            Field::CountryCode => {
                let codes: Vec<&str> = CountryCode::all().iter().map(|c| c.dial_code()).collect();
                cycle(&codes, current, forward)
            }
            _ => return Action::None,
        };
        self.apply(field, next);
        Action::None
    }

    fn edit_notes(&mut self, key: KeyEvent) -> Action {
        if self.notes.input(key) {
            let text = self.notes.lines().join("\n");
            self.apply(Field::AdditionalInfo, &text);
        }
        Action::None
    }

    /// Commits one edit and refreshes the displayed values.
    fn apply(&mut self, field: Field, raw: &str) {
        self.notice = None;
        if let Err(e) = self.form.update(field, raw) {
            log::warn!("rejected {field:?} value: {e}");
        }
        self.sync();
    }

    fn sync(&mut self) {
        let record = self.form.record();
        for &field in Field::all() {
            let shown = match field {
                Field::Gender => record
                    .gender
                    .map(|g: Gender| g.to_string())
                    .unwrap_or_else(|| "Select Gender".to_string()),
                Field::CountryCode => record.country_code.to_string(),
                Field::Birthday => self.birthday_draft.clone(),
                Field::AdditionalInfo => continue,
                _ => record.value(field).to_string(),
            };
            self.layout.set_value(field, shown);
        }
    }
}

impl ScreenState for RegistrationState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        RegistrationState::handle_key(self, key)
    }
}

/// Input filter applied before a character reaches the record.
///
/// The birthday only takes digits and `-`, up to `YYYY-MM-DD`. The phone
/// number is sanitized by the record itself.
fn accepts(field: Field, current: &str, ch: char) -> bool {
    match field {
        Field::Birthday => (ch.is_ascii_digit() || ch == '-') && current.len() < BIRTHDAY_LEN,
        _ => !ch.is_control(),
    }
}

/// Cycles through a slice to find the next or previous element.
fn cycle<'a>(items: &[&'a str], current: &str, forward: bool) -> &'a str {
    let pos = items.iter().position(|&x| x == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % items.len()
    } else {
        (pos + items.len() - 1) % items.len()
    };
    items[next]
}

/// Renders the registration screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_registration(
    state: &RegistrationState,
    pipeline: &PhotoPipeline,
    frame: &mut Frame,
    area: Rect,
) {
    let block = Block::default()
        .title(" Student Registration ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body_area, status_area, footer_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let [photo_area, form_area] =
        Layout::horizontal([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)]).areas(body_area);

    let record = state.record();
    let photo_ctx = PhotoPaneContext {
        file: record.passport_photo.as_ref(),
        preview: pipeline.preview(),
        pending: pipeline.is_pending(),
        warning: pipeline.warning(),
    };
    draw_photo_pane(&photo_ctx, frame, photo_area);

    let areas = draw_form(state.layout(), frame, form_area);
    if let Some(index) = state.layout().index_of(Field::AdditionalInfo) {
        let is_focused = state.layout().focus() == index;
        let mut notes = state.notes.clone();
        notes.set_block(field_block(&state.layout().fields()[index], is_focused));
        if !is_focused {
            notes.set_cursor_style(Style::default());
        }
        notes.set_cursor_line_style(Style::default());
        frame.render_widget(&notes, areas[index]);
    }

    let status = StatusBarContext {
        can_submit: state.form().is_valid(),
        notice: state.notice().map(str::to_string),
    };
    draw_status_bar(&status, frame, status_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  ←/→: choose  Ctrl+O: photo  Ctrl+S: register  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
