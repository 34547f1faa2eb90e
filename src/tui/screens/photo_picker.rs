//! Photo picker screen — choose a local image file by path.

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::PhotoFile;
use crate::photo::is_image;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

/// State for the photo picker screen.
#[derive(Debug, Clone, Default)]
pub struct PhotoPickerState {
    input: String,
    error: Option<String>,
}

impl PhotoPickerState {
    /// Creates an empty picker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the typed path.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the rejection message for the last attempt, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clears the typed path and any error.
    pub fn reset(&mut self) {
        self.input.clear();
        self.error = None;
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Action::Quit,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char(ch) => {
                self.input.push(ch);
                self.error = None;
                Action::None
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
                Action::None
            }
            KeyCode::Esc => Action::Navigate(Screen::Registration),
            KeyCode::Enter => self.choose(),
            _ => Action::None,
        }
    }

    /// Accepts the typed path if it names an existing image file.
    fn choose(&mut self) -> Action {
        let raw = self.input.trim();
        if raw.is_empty() {
            self.error = Some("Enter the path of an image file".to_string());
            return Action::None;
        }

        let path = expand_home(raw);
        if !path.is_file() {
            self.error = Some(format!("No such file: {}", path.display()));
            return Action::None;
        }
        if !is_image(&path) {
            self.error = Some(format!("Not an image: {}", path.display()));
            return Action::None;
        }

        self.error = None;
        Action::AttachPhoto(PhotoFile::new(path))
    }
}

impl ScreenState for PhotoPickerState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        PhotoPickerState::handle_key(self, key)
    }
}

/// Expands a leading `~/` to the home directory.
fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| Path::new(raw).to_path_buf()),
        None => PathBuf::from(raw),
    }
}

/// Renders the photo picker screen.
#[mutants::skip]
pub fn draw_photo_picker(state: &PhotoPickerState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Upload Photo ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [prompt_area, input_area, error_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new("Path to a passport photograph (PNG, JPEG, ...):"),
        prompt_area,
    );

    let input = Paragraph::new(Line::from(vec![
        Span::raw(state.input()),
        Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ),
    ]))
    .block(
        Block::default()
            .title("File")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(input, input_area);

    if let Some(err) = state.error() {
        let error = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
        frame.render_widget(error, error_area);
    }

    let footer = Paragraph::new("Enter: attach  Esc: cancel")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
