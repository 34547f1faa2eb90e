use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};

use crate::photo::PhotoPipeline;
use crate::submit::{LogSink, SubmitSink};

use super::action::Action;
use super::error::AppError;
use super::screens::{
    HelpState, PhotoPickerState, RegistrationState, draw_help, draw_photo_picker,
    draw_registration,
};

/// How long the event loop waits for input before checking the photo pipeline.
const TICK: Duration = Duration::from_millis(100);

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Fill in and submit the registration form.
    Registration,
    /// Choose a passport photo by path.
    PhotoPicker,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable label used in log messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Registration => "Registration",
            Self::PhotoPicker => "Photo Picker",
            Self::Help => "Help",
        }
    }
}

/// Top-level application state.
pub struct App<S: SubmitSink = LogSink> {
    screen: Screen,
    registration: RegistrationState,
    picker: PhotoPickerState,
    help: HelpState,
    pipeline: PhotoPipeline,
    sink: S,
    should_quit: bool,
}

impl<S: SubmitSink> App<S> {
    /// Creates a new `App` starting on the [`Screen::Registration`] screen.
    pub fn new(pipeline: PhotoPipeline, sink: S) -> Self {
        Self {
            screen: Screen::Registration,
            registration: RegistrationState::new(),
            picker: PhotoPickerState::new(),
            help: HelpState::new(),
            pipeline,
            sink,
            should_quit: false,
        }
    }

    /// Main event loop: apply finished previews → draw → poll event → dispatch.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            self.pipeline.poll();
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::Registration => {
                draw_registration(&self.registration, &self.pipeline, frame, area);
            }
            Screen::PhotoPicker => draw_photo_picker(&self.picker, frame, area),
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help.set_origin(self.screen);
                self.help.reset();
                self.navigate(Screen::Help);
            }
            return;
        }

        let action = match self.screen {
            Screen::Registration => self.registration.handle_key(key),
            Screen::PhotoPicker => self.picker.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => {
                if screen == Screen::PhotoPicker && self.screen == Screen::Registration {
                    self.picker.reset();
                }
                self.navigate(screen);
            }
            Action::AttachPhoto(photo) => {
                log::info!("photo selected: {}", photo.path().display());
                self.pipeline.submit(&photo);
                self.registration.attach_photo(photo);
                self.picker.reset();
                self.navigate(Screen::Registration);
            }
            Action::Submit(record) => self.sink.accept(record),
            Action::Quit => self.should_quit = true,
        }
    }

    fn navigate(&mut self, screen: Screen) {
        log::debug!("{} -> {}", self.screen.label(), screen.label());
        self.screen = screen;
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the registration screen state.
    pub fn registration(&self) -> &RegistrationState {
        &self.registration
    }

    /// Returns the photo pipeline.
    pub fn pipeline(&self) -> &PhotoPipeline {
        &self.pipeline
    }

    /// Returns the submit sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use tokio::runtime::Handle;

    use super::*;
    use crate::model::{Field, RegistrationRecord};
    use crate::photo::preview::tests::png_bytes;

    type TestApp = App<Vec<RegistrationRecord>>;

    fn make_app() -> TestApp {
        App::new(PhotoPipeline::new(Handle::current()), Vec::new())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(app: &mut TestApp, s: &str) {
        for ch in s.chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
    }

    /// Moves focus to `field` with Tab, starting from the current focus.
    fn tab_to(app: &mut TestApp, field: Field) {
        for _ in 0..Field::all().len() {
            if app.registration().layout().focused().map(|f| f.key) == Some(field) {
                return;
            }
            app.handle_key(press(KeyCode::Tab));
        }
        panic!("{field:?} is not reachable with Tab");
    }

    fn fill_required_text(app: &mut TestApp) {
        for (field, value) in [
            (Field::Surname, "Doe"),
            (Field::Firstname, "Jane"),
            (Field::Birthday, "2000-01-01"),
            (Field::PhoneNumber, "0801234567"),
            (Field::Address, "1 Main St"),
            (Field::CourseOfStudy, "Physics"),
            (Field::StateOfOrigin, "Lagos"),
        ] {
            tab_to(app, field);
            type_string(app, value);
        }
        tab_to(app, Field::Gender);
        app.handle_key(press(KeyCode::Right));
    }

    fn attach(app: &mut TestApp, path: &Path) {
        app.handle_key(ctrl('o'));
        assert_eq!(app.screen(), Screen::PhotoPicker);
        type_string(app, &path.display().to_string());
        app.handle_key(press(KeyCode::Enter));
    }

    mod navigation {
        use super::*;

        #[tokio::test]
        async fn new_starts_on_registration() {
            let app = make_app();
            assert_eq!(app.screen(), Screen::Registration);
            assert!(!app.should_quit());
            assert!(app.sink().is_empty());
        }

        #[tokio::test]
        async fn esc_on_registration_quits() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::Esc));
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn release_events_are_ignored() {
            let mut app = make_app();
            app.handle_key(release(KeyCode::Esc));
            assert!(!app.should_quit());
        }

        #[tokio::test]
        async fn f1_opens_help_and_returns_to_origin() {
            let mut app = make_app();
            app.handle_key(ctrl('o'));
            app.handle_key(press(KeyCode::F(1)));
            assert_eq!(app.screen(), Screen::Help);
            app.handle_key(press(KeyCode::F(1)));
            assert_eq!(app.screen(), Screen::Help);
            app.handle_key(press(KeyCode::Esc));
            assert_eq!(app.screen(), Screen::PhotoPicker);
        }

        #[tokio::test]
        async fn picker_esc_returns_to_form() {
            let mut app = make_app();
            app.handle_key(ctrl('o'));
            app.handle_key(press(KeyCode::Esc));
            assert_eq!(app.screen(), Screen::Registration);
            assert!(!app.should_quit());
        }

        #[test]
        fn screen_labels_match_expected() {
            let expected = [
                (Screen::Registration, "Registration"),
                (Screen::PhotoPicker, "Photo Picker"),
                (Screen::Help, "Help"),
            ];
            for (screen, label) in expected {
                assert_eq!(screen.label(), label, "{screen:?} label mismatch");
            }
        }
    }

    mod submission {
        use super::*;

        #[tokio::test]
        async fn empty_form_is_not_handed_off() {
            let mut app = make_app();
            app.handle_key(ctrl('s'));
            assert!(app.sink().is_empty());
        }

        #[tokio::test]
        async fn fields_without_photo_are_not_handed_off() {
            let mut app = make_app();
            fill_required_text(&mut app);
            app.handle_key(ctrl('s'));
            assert!(app.sink().is_empty());
        }

        #[tokio::test]
        async fn full_flow_hands_off_record() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("jane.png");
            fs::write(&path, png_bytes(4, 4, [10, 20, 30])).unwrap();

            let mut app = make_app();
            fill_required_text(&mut app);
            attach(&mut app, &path);
            assert_eq!(app.screen(), Screen::Registration);

            app.handle_key(ctrl('s'));
            assert_eq!(app.sink().len(), 1);
            let record = &app.sink()[0];
            assert_eq!(record.surname, "Doe");
            assert_eq!(
                record.passport_photo.as_ref().map(|p| p.name.as_str()),
                Some("jane.png")
            );
        }

        #[tokio::test]
        async fn valid_before_preview_finishes() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("jane.png");
            fs::write(&path, png_bytes(4, 4, [10, 20, 30])).unwrap();

            let mut app = make_app();
            fill_required_text(&mut app);
            attach(&mut app, &path);

            assert!(app.pipeline().is_pending());
            assert!(app.pipeline().preview().is_none());
            assert!(app.registration().form().is_valid());

            app.pipeline.wait().await;
            assert!(!app.pipeline().is_pending());
            assert!(app.pipeline().preview().is_some());
            assert!(app.registration().form().is_valid());
        }

        #[tokio::test]
        async fn partial_birthday_is_not_handed_off() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("jane.png");
            fs::write(&path, png_bytes(2, 2, [0, 0, 0])).unwrap();

            let mut app = make_app();
            fill_required_text(&mut app);
            tab_to(&mut app, Field::Birthday);
            for _ in 0.."2000-01-01".len() {
                app.handle_key(press(KeyCode::Backspace));
            }
            type_string(&mut app, "2-");
            attach(&mut app, &path);

            app.handle_key(ctrl('s'));
            assert!(app.sink().is_empty());
            assert_eq!(app.registration().record().birthday, "");
        }

        #[tokio::test]
        async fn rejected_path_keeps_picker_open() {
            let dir = tempfile::tempdir().unwrap();
            let mut app = make_app();
            attach(&mut app, &dir.path().join("missing.png"));
            assert_eq!(app.screen(), Screen::PhotoPicker);
            assert!(!app.pipeline().is_pending());
            assert!(app.registration().record().passport_photo.is_none());
        }
    }
}
