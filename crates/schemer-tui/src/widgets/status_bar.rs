//! Status bar widget for the top of the TUI.
//!
//! Format: `● Ready │ #ff0000 │ Monochrome │ 5 colors`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::{App, FetchState};
use crate::theme::Theme;

/// Status bar content.
#[derive(Debug, Clone, Default)]
pub struct StatusBarContent {
    /// Request phase ("Ready", "Loading", "Failed").
    pub phase: String,
    /// Phase indicator icon.
    pub indicator: String,
    /// Base color being explored.
    pub color: String,
    /// Current mode label.
    pub mode: String,
    /// Number of colors shown.
    pub count: Option<usize>,
    /// Error detail, if the last request or copy failed.
    pub error: Option<String>,
}

impl StatusBarContent {
    /// Build status bar content from app state.
    pub fn from_app(app: &App) -> Self {
        let (phase, indicator, fetch_error) = match &app.fetch_state {
            FetchState::Idle => ("Ready", app.icons.idle(), None),
            FetchState::Loading => ("Loading", app.icons.loading(app.tick), None),
            FetchState::Failed(e) => ("Failed", app.icons.failed(), Some(e.clone())),
        };
        let count = app.session.colors().len();

        Self {
            phase: phase.into(),
            indicator: indicator.into(),
            color: app.color_input.value().to_string(),
            mode: app.session.current_mode_label(),
            count: (count > 0).then_some(count),
            error: fetch_error.or_else(|| app.clipboard_error.clone()),
        }
    }
}

/// Status bar widget.
pub struct StatusBar<'a> {
    content: &'a StatusBarContent,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget.
    pub fn new(content: &'a StatusBarContent, theme: &'a Theme) -> Self {
        Self { content, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let phase_color = if self.content.error.is_some() {
            self.theme.error
        } else if self.content.phase == "Loading" {
            self.theme.info
        } else {
            self.theme.success
        };

        let mut spans = vec![
            Span::styled(
                format!("{} ", self.content.indicator),
                Style::default().fg(phase_color),
            ),
            Span::styled(&self.content.phase, Style::default().fg(self.theme.text)),
            Span::styled(" │ ", Style::default().fg(self.theme.muted)),
            Span::styled(&self.content.color, Style::default().fg(self.theme.text)),
            Span::styled(" │ ", Style::default().fg(self.theme.muted)),
            Span::styled(&self.content.mode, Style::default().fg(self.theme.subtext)),
        ];

        if let Some(count) = self.content.count {
            spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            spans.push(Span::styled(
                format!("{count} colors"),
                Style::default().fg(self.theme.info),
            ));
        }

        if let Some(ref error) = self.content.error {
            spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            spans.push(Span::styled(error, Style::default().fg(self.theme.error)));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.theme.surface))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, create_test_app};
    use schemer_engine::SchemeError;

    fn render(content: &StatusBarContent) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(content, &theme).render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_initial_status() {
        let app = create_test_app();
        let content = StatusBarContent::from_app(&app);
        assert_eq!(render(&content), "● Ready │ #ff0000 │ mode=monochrome");
    }

    #[test]
    fn test_failed_status_shows_error() {
        let mut app = create_test_app();
        app.begin_fetch();
        app.finish_fetch(Err(SchemeError::Timeout("https://x".into())));

        let content = StatusBarContent::from_app(&app);
        assert_eq!(content.phase, "Failed");
        assert!(render(&content).contains("Request timed out: https://x"));
    }
}
