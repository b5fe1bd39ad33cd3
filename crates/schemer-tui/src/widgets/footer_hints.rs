//! Footer line: keybinding hints, or the copy confirmation while it is up.
//!
//! Format: `Color │ [Enter] fetch │ [Tab] focus │ [?] help`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::app::Focus;
use crate::theme::{IconSet, Theme};

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Tab", "Enter").
    pub key: String,
    /// The action description (e.g., "focus", "copy").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Hints for the focused control.
pub fn hints_for(focus: Focus) -> Vec<KeyHint> {
    let mut hints = match focus {
        Focus::ColorInput => vec![
            KeyHint::new("Enter", "fetch"),
            KeyHint::new("r", "random"),
        ],
        Focus::ModeSelect => vec![
            KeyHint::new("j/k", "mode"),
            KeyHint::new("Enter", "fetch"),
        ],
        Focus::Swatches => vec![
            KeyHint::new("h/l", "select"),
            KeyHint::new("Enter/y", "copy"),
        ],
    };
    hints.push(KeyHint::new("Tab", "focus"));
    hints.push(KeyHint::new("?", "help"));
    hints
}

/// Footer widget.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
    icons: &'a IconSet,
    focus: Option<Focus>,
    snackbar: Option<&'a str>,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer hints widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            hints,
            theme,
            icons,
            focus: None,
            snackbar: None,
        }
    }

    /// Set focused control to display.
    #[must_use]
    pub fn focus(mut self, focus: Focus) -> Self {
        self.focus = Some(focus);
        self
    }

    /// Show a confirmation message instead of the hints.
    #[must_use]
    pub fn snackbar(mut self, message: Option<&'a str>) -> Self {
        self.snackbar = message;
        self
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(message) = self.snackbar {
            let line = Line::from(vec![
                Span::styled(
                    format!(" {} ", self.icons.copied()),
                    Style::default().fg(self.theme.success),
                ),
                Span::styled(message, Style::default().fg(self.theme.text)),
            ]);
            Paragraph::new(line)
                .style(Style::default().bg(self.theme.surface))
                .render(area, buf);
            return;
        }

        let mut left_spans = Vec::new();
        let mut right_spans = Vec::new();

        if let Some(focus) = self.focus {
            let focus_str = match focus {
                Focus::ColorInput => "Color",
                Focus::ModeSelect => "Mode",
                Focus::Swatches => "Swatches",
            };
            left_spans.push(Span::styled(focus_str, Style::default().fg(self.theme.primary)));
        }

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                right_spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            }
            right_spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(&hint.key, Style::default().fg(self.theme.primary)));
            right_spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(&hint.action, Style::default().fg(self.theme.subtext)));
        }

        // Right-align the hints
        let left_width: usize = left_spans.iter().map(|s| s.content.width()).sum();
        let right_width: usize = right_spans.iter().map(|s| s.content.width()).sum();
        let padding = usize::from(area.width).saturating_sub(left_width + right_width);
        if padding > 0 {
            left_spans.push(Span::raw(" ".repeat(padding)));
        }
        left_spans.extend(right_spans);

        Paragraph::new(Line::from(left_spans))
            .style(Style::default().bg(self.theme.surface))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_hints_depend_on_focus() {
        let swatches = hints_for(Focus::Swatches);
        assert!(swatches.iter().any(|h| h.action == "copy"));

        let input = hints_for(Focus::ColorInput);
        assert!(input.iter().any(|h| h.action == "random"));
        assert!(input.iter().all(|h| h.action != "copy"));
    }

    #[test]
    fn test_snackbar_replaces_hints() {
        let theme = Theme::default();
        let icons = IconSet::default();
        let hints = hints_for(Focus::Swatches);
        let area = Rect::new(0, 0, 60, 1);

        let mut buf = Buffer::empty(area);
        FooterHints::new(&hints, &theme, &icons)
            .focus(Focus::Swatches)
            .snackbar(Some("Copied #FF0000 to clipboard"))
            .render(area, &mut buf);

        let line = buffer_to_string(&buf);
        assert_eq!(line, " ✓ Copied #FF0000 to clipboard");
    }

    #[test]
    fn test_hints_right_aligned() {
        let theme = Theme::default();
        let icons = IconSet::default();
        let hints = vec![KeyHint::new("?", "help")];
        let area = Rect::new(0, 0, 30, 1);

        let mut buf = Buffer::empty(area);
        FooterHints::new(&hints, &theme, &icons)
            .focus(Focus::ModeSelect)
            .render(area, &mut buf);

        let line = buffer_to_string(&buf);
        assert!(line.starts_with("Mode"));
        assert!(line.ends_with("[?] help"));
    }
}
