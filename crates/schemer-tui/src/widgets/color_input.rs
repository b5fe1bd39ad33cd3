//! Base color input widget.
//!
//! ```text
//! ┌ Color ─────────────┐
//! │ ██ #ff0000█         │
//! └────────────────────┘
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::{swatch_color, Theme};

/// Longest accepted input, including the `#` marker.
pub const MAX_INPUT_LEN: usize = 7;

/// Editable base color.
#[derive(Debug, Clone, Default)]
pub struct ColorInputState {
    value: String,
}

impl ColorInputState {
    /// Create an input holding `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value: String = value.into();
        Self {
            value: value.chars().take(MAX_INPUT_LEN).collect(),
        }
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Append a character. Input beyond [`MAX_INPUT_LEN`] is dropped, as is
    /// a `#` anywhere but the start.
    pub fn insert(&mut self, ch: char) {
        if self.value.chars().count() >= MAX_INPUT_LEN {
            return;
        }
        if ch == '#' && !self.value.is_empty() {
            return;
        }
        self.value.push(ch);
    }

    /// Remove the last character.
    pub fn backspace(&mut self) {
        self.value.pop();
    }
}

/// Color input widget.
pub struct ColorInput<'a> {
    state: &'a ColorInputState,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> ColorInput<'a> {
    /// Create a new color input widget.
    pub fn new(state: &'a ColorInputState, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            focused: false,
        }
    }

    /// Set whether the input is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ColorInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };
        let block = Block::default()
            .title(" Color ")
            .title_style(Style::default().fg(self.theme.text))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        // Preview chip only when the value is a complete color
        let preview = match swatch_color(self.state.value()) {
            Some(color) => Span::styled("  ", Style::default().bg(color)),
            None => Span::styled("??", Style::default().fg(self.theme.muted)),
        };

        let mut spans = vec![
            preview,
            Span::raw(" "),
            Span::styled(self.state.value(), Style::default().fg(self.theme.text)),
        ];
        if self.focused {
            spans.push(Span::styled("█", Style::default().fg(self.theme.primary)));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
