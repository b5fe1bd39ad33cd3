//! Scheme mode selector.
//!
//! Lists the modes discovered on the first successful fetch. Until then it
//! shows the default mode fragment.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use schemer_engine::SchemeSession;

use crate::theme::{IconSet, Theme};

/// Mode selector widget.
pub struct ModeSelect<'a> {
    session: &'a SchemeSession,
    theme: &'a Theme,
    icons: &'a IconSet,
    focused: bool,
}

impl<'a> ModeSelect<'a> {
    /// Create a new mode selector.
    pub fn new(session: &'a SchemeSession, theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            session,
            theme,
            icons,
            focused: false,
        }
    }

    /// Set whether the selector is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let catalog = self.session.catalog();
        if !catalog.is_populated() {
            return vec![Line::from(vec![
                Span::styled(self.icons.selected(), Style::default().fg(self.theme.primary)),
                Span::styled(
                    self.session.current_mode().to_string(),
                    Style::default().fg(self.theme.subtext),
                ),
            ])];
        }

        let selected = self.session.selected_mode_index();
        catalog
            .options()
            .iter()
            .enumerate()
            .map(|(i, option)| {
                if Some(i) == selected {
                    Line::from(vec![
                        Span::styled(self.icons.selected(), Style::default().fg(self.theme.primary)),
                        Span::styled(
                            option.label.clone(),
                            Style::default()
                                .fg(self.theme.primary)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ])
                } else {
                    Line::from(vec![
                        Span::raw("  "),
                        Span::styled(option.label.clone(), Style::default().fg(self.theme.text)),
                    ])
                }
            })
            .collect()
    }
}

#[allow(clippy::cast_possible_truncation)]
impl Widget for ModeSelect<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };
        let block = Block::default()
            .title(" Mode ")
            .title_style(Style::default().fg(self.theme.text))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let inner_height = area.height.saturating_sub(2) as usize;
        let lines = self.lines();

        // Keep the selected entry in view
        let selected = self.session.selected_mode_index().unwrap_or(0);
        let scroll = selected.saturating_sub(inner_height.saturating_sub(1));

        Paragraph::new(lines)
            .block(block)
            .scroll((scroll as u16, 0))
            .render(area, buf);
    }
}
