//! Status bar widget — the Register control plus a one-line notice.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Mirrors the validity gate; the control is drawn disabled when `false`.
    pub can_submit: bool,
    /// Transient message, e.g. after a successful submit.
    pub notice: Option<String>,
}

/// Returns the style of the Register control.
fn register_style(can_submit: bool) -> Style {
    if can_submit {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    }
}

/// Renders a one-line status bar:
///
/// - Enabled:  `[ Register ]  Ctrl+S to submit`
/// - Disabled: `[ Register ]  fill in all required (*) fields and upload a photo`
///
/// followed by the notice in green when one is set.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let hint = if ctx.can_submit {
        "Ctrl+S to submit"
    } else {
        "fill in all required (*) fields and upload a photo"
    };

    let mut spans = vec![
        Span::styled("[ Register ]", register_style(ctx.can_submit)),
        Span::raw("  "),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
    ];

    if let Some(notice) = &ctx.notice {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Green),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render_status_bar(ctx: &StatusBarContext, width: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        terminal
    }

    fn line(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.width)
            .map(|x| buf[(x, 0)].symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    #[test]
    fn renders_enabled_control() {
        let ctx = StatusBarContext {
            can_submit: true,
            notice: None,
        };
        let terminal = render_status_bar(&ctx, 60);
        assert!(line(&terminal).contains("[ Register ]"));
        assert!(line(&terminal).contains("Ctrl+S to submit"));
        let cell = &terminal.backend().buffer()[(0, 0)];
        assert_eq!(cell.bg, Color::Cyan);
    }

    #[test]
    fn renders_disabled_control() {
        let terminal = render_status_bar(&StatusBarContext::default(), 80);
        assert!(line(&terminal).contains("fill in all required"));
        let cell = &terminal.backend().buffer()[(0, 0)];
        assert_eq!(cell.bg, Color::DarkGray);
    }

    #[test]
    fn renders_notice() {
        let ctx = StatusBarContext {
            can_submit: true,
            notice: Some("Registration submitted".into()),
        };
        let terminal = render_status_bar(&ctx, 80);
        assert!(line(&terminal).contains("Registration submitted"));
    }
}
