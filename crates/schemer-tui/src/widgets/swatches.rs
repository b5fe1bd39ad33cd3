//! Swatch grid: one colored column per scheme color, in API order.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};
use schemer_engine::ColorEntry;
use std::rc::Rc;

use super::truncate_to_width;
use crate::theme::{label_color, swatch_color, IconSet, Theme};

/// Split `area` into one equal-width column per color.
#[allow(clippy::cast_possible_truncation)]
pub fn columns(area: Rect, count: usize) -> Rc<[Rect]> {
    let count = count.min(u16::MAX as usize) as u32;
    let constraints = (0..count).map(|_| Constraint::Ratio(1, count));
    Layout::horizontal(constraints).split(area)
}

/// Swatch grid widget.
pub struct SwatchGrid<'a> {
    colors: &'a [ColorEntry],
    selected: Option<usize>,
    theme: &'a Theme,
    icons: &'a IconSet,
    focused: bool,
}

impl<'a> SwatchGrid<'a> {
    /// Create a new swatch grid.
    pub fn new(colors: &'a [ColorEntry], theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            colors,
            selected: None,
            theme,
            icons,
            focused: false,
        }
    }

    /// Mark a swatch as selected.
    #[must_use]
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Set whether the grid is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_swatch(&self, index: usize, color: &ColorEntry, area: Rect, buf: &mut Buffer) {
        let bg = swatch_color(&color.hex).unwrap_or(self.theme.surface);
        let fg = label_color(&color.hex);
        buf.set_style(area, Style::default().bg(bg));

        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.focused && self.selected == Some(index) {
            let marker = Rect { height: 1, ..area };
            Paragraph::new(Line::from(self.icons.swatch_cursor()).centered())
                .style(Style::default().fg(fg).bg(bg))
                .render(marker, buf);
        }

        let name_row = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        let name = truncate_to_width(&color.name, usize::from(area.width.saturating_sub(1)));
        Paragraph::new(Line::from(name).centered())
            .style(Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD))
            .render(name_row, buf);
    }
}

impl Widget for SwatchGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };
        let block = Block::default()
            .title(" Scheme ")
            .title_style(Style::default().fg(self.theme.text))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.colors.is_empty() {
            Paragraph::new(Line::from("No scheme yet. Press Enter to fetch one.").centered())
                .style(Style::default().fg(self.theme.muted))
                .render(inner, buf);
            return;
        }

        let cols = columns(inner, self.colors.len());
        for (i, (color, col)) in self.colors.iter().zip(cols.iter()).enumerate() {
            self.render_swatch(i, color, *col, buf);
        }
    }
}
