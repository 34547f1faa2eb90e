//! Help screen — scrollable keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

static REGISTRATION_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("←/→ or Space", "change gender / country code"),
    ("Backspace", "delete last character"),
    ("Ctrl+O", "upload passport photo"),
    ("Ctrl+S / Enter", "register (only when all * fields are filled)"),
    ("Enter in notes", "new line"),
    ("Esc / Ctrl+C", "quit"),
    ("F1", "help"),
];

static PHOTO_PICKER_KEYS: &[(&str, &str)] = &[
    ("Enter", "attach image at the typed path"),
    ("~/", "expands to your home directory"),
    ("Esc", "cancel"),
    ("Ctrl+C", "quit"),
    ("F1", "help"),
];

static HELP_KEYS: &[(&str, &str)] = &[("↑/↓", "scroll"), ("q / Esc", "back")];

/// State for the help screen.
#[derive(Debug, Clone)]
pub struct HelpState {
    scroll: u16,
    origin: Screen,
}

impl Default for HelpState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpState {
    /// Creates a new [`HelpState`] with scroll position at the top and origin [`Screen::Registration`].
    pub fn new() -> Self {
        Self {
            scroll: 0,
            origin: Screen::Registration,
        }
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Returns the origin screen that opened help.
    pub fn origin(&self) -> Screen {
        self.origin
    }

    /// Sets the origin screen to return to when help is dismissed.
    pub fn set_origin(&mut self, screen: Screen) {
        self.origin = screen;
    }

    /// Resets the scroll position to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(self.origin),
            _ => Action::None,
        }
    }
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        HelpState::handle_key(self, key)
    }
}

fn screen_name(screen: Screen) -> &'static str {
    match screen {
        Screen::Registration => "Registration",
        Screen::PhotoPicker => "Upload Photo",
        Screen::Help => "Help",
    }
}

fn build_section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, header_style)),
    ];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<20}"), key_style),
            Span::styled(*desc, dim_style),
        ]));
    }
    lines
}

fn help_content(origin: Screen) -> Vec<Line<'static>> {
    match origin {
        Screen::Registration => build_section("Registration", REGISTRATION_KEYS),
        Screen::PhotoPicker => build_section("Upload Photo", PHOTO_PICKER_KEYS),
        Screen::Help => build_section("Help", HELP_KEYS),
    }
}

/// Renders the help screen.
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let title = format!(" Help – {} ", screen_name(state.origin()));
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let content_lines = help_content(state.origin());
    let total = content_lines.len() as u16;
    let height = content_area.height;
    let capped_scroll = state.scroll().min(total.saturating_sub(height));

    let paragraph = Paragraph::new(content_lines).scroll((capped_scroll, 0));
    frame.render_widget(paragraph, content_area);

    let footer =
        Paragraph::new("↑/↓: scroll  q/Esc: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn new_initializes_scroll_and_origin() {
            let state = HelpState::new();
            assert_eq!(state.scroll(), 0);
            assert_eq!(state.origin(), Screen::Registration);
        }

        #[test]
        fn set_origin_stores_screen() {
            let mut state = HelpState::default();
            state.set_origin(Screen::PhotoPicker);
            assert_eq!(state.origin(), Screen::PhotoPicker);
        }
    }

    mod handle_key {
        use super::*;

        #[test]
        fn up_at_zero_saturates() {
            let mut state = HelpState::new();
            let action = state.handle_key(press(KeyCode::Up));
            assert_eq!(action, Action::None);
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn down_then_up() {
            let mut state = HelpState::new();
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.scroll(), 1);
        }

        #[test]
        fn q_navigates_to_origin() {
            let mut state = HelpState::new();
            state.set_origin(Screen::PhotoPicker);
            let action = state.handle_key(press(KeyCode::Char('q')));
            assert_eq!(action, Action::Navigate(Screen::PhotoPicker));
        }

        #[test]
        fn esc_navigates_to_origin() {
            let mut state = HelpState::new();
            let action = state.handle_key(press(KeyCode::Esc));
            assert_eq!(action, Action::Navigate(Screen::Registration));
        }

        #[test]
        fn unknown_key_returns_none() {
            let mut state = HelpState::new();
            let action = state.handle_key(press(KeyCode::Char('x')));
            assert_eq!(action, Action::None);
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn reset_sets_scroll_to_zero() {
            let mut state = HelpState::new();
            state.handle_key(press(KeyCode::Down));
            state.reset();
            assert_eq!(state.scroll(), 0);
        }
    }

    mod help_content_fn {
        use super::*;

        fn content_text(screen: Screen) -> String {
            help_content(screen)
                .into_iter()
                .flat_map(|l| l.spans.into_iter())
                .map(|s| s.content.into_owned())
                .collect()
        }

        #[test]
        fn each_screen_returns_nonempty_content() {
            for screen in [Screen::Registration, Screen::PhotoPicker, Screen::Help] {
                assert!(
                    !help_content(screen).is_empty(),
                    "{screen:?} should have content"
                );
            }
        }

        #[test]
        fn registration_content_mentions_submit() {
            let text = content_text(Screen::Registration);
            assert!(text.contains("Ctrl+S"));
            assert!(text.contains("upload passport photo"));
            assert!(!text.contains("attach image"));
        }

        #[test]
        fn screen_names() {
            assert_eq!(screen_name(Screen::Registration), "Registration");
            assert_eq!(screen_name(Screen::PhotoPicker), "Upload Photo");
            assert_eq!(screen_name(Screen::Help), "Help");
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render_help(state: &HelpState, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    draw_help(state, frame, frame.area());
                })
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn title_includes_origin_screen_name() {
            let mut state = HelpState::new();
            state.set_origin(Screen::PhotoPicker);
            let output = render_help(&state, 80, 20);
            assert!(output.contains("Upload Photo"));
            assert!(output.contains("attach image"));
        }

        #[test]
        fn footer_contains_esc() {
            let output = render_help(&HelpState::new(), 80, 20);
            assert!(output.contains("Esc"), "footer should mention Esc");
        }
    }
}
