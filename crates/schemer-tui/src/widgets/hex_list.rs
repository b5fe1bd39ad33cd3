//! Hex label row under the swatches.
//!
//! Each label sits under its swatch column and copies that color when
//! selected.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};
use schemer_engine::ColorEntry;

use super::swatches::columns;
use crate::theme::Theme;

/// Hex list widget.
pub struct HexList<'a> {
    colors: &'a [ColorEntry],
    selected: Option<usize>,
    theme: &'a Theme,
}

impl<'a> HexList<'a> {
    /// Create a new hex list.
    pub fn new(colors: &'a [ColorEntry], theme: &'a Theme) -> Self {
        Self {
            colors,
            selected: None,
            theme,
        }
    }

    /// Highlight a label.
    #[must_use]
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for HexList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));
        let inner = block.inner(area);
        block.render(area, buf);

        let cols = columns(inner, self.colors.len());
        for (i, (color, col)) in self.colors.iter().zip(cols.iter()).enumerate() {
            let style = if self.selected == Some(i) {
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(self.theme.subtext)
            };
            Paragraph::new(Line::from(color.hex.as_str()).centered())
                .style(style)
                .render(*col, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_one_label_per_color() {
        let colors = vec![
            ColorEntry::new("#FF0000", "Red"),
            ColorEntry::new("#00FF00", "Green"),
            ColorEntry::new("#0000FF", "Blue"),
        ];
        let theme = Theme::default();
        let area = Rect::new(0, 0, 62, 3);
        let mut buf = Buffer::empty(area);

        HexList::new(&colors, &theme).render(area, &mut buf);

        let screen = buffer_to_string(&buf);
        let row = screen.lines().nth(1).unwrap();
        let red = row.find("#FF0000").unwrap();
        let green = row.find("#00FF00").unwrap();
        let blue = row.find("#0000FF").unwrap();
        assert!(red < green && green < blue);
        assert_eq!(row.matches('#').count(), 3);
    }
}
