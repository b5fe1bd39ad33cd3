//! The scheme browser: color input and modes on the left, swatches and
//! hex labels on the right.

use super::Screen;
use crate::app::{App, Focus};
use crate::widgets::{
    hints_for, ColorInput, FooterHints, HexList, ModeSelect, StatusBar, StatusBarContent,
    SwatchGrid,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};
use std::time::Instant;

/// Width of the left column.
const SIDEBAR_WIDTH: u16 = 24;

/// Areas of the browser layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserLayout {
    pub status: Rect,
    pub color_input: Rect,
    pub modes: Rect,
    pub swatches: Rect,
    pub hex_list: Rect,
    pub footer: Rect,
}

impl BrowserLayout {
    /// Compute the layout for `area`.
    pub fn new(area: Rect) -> Self {
        let [status, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .areas(area);

        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
                .areas(body);

        let [color_input, modes] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(sidebar);

        let [swatches, hex_list] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(main);

        Self {
            status,
            color_input,
            modes,
            swatches,
            hex_list,
            footer,
        }
    }
}

/// Main scheme browser screen.
pub struct BrowserScreen;

impl Screen for BrowserScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let layout = BrowserLayout::new(area);
        let colors = app.session.colors();
        let selected = (!colors.is_empty()).then_some(app.selected_swatch);

        let status = StatusBarContent::from_app(app);
        StatusBar::new(&status, &app.theme).render(layout.status, buf);

        ColorInput::new(&app.color_input, &app.theme)
            .focused(app.focus == Focus::ColorInput)
            .render(layout.color_input, buf);

        ModeSelect::new(&app.session, &app.theme, &app.icons)
            .focused(app.focus == Focus::ModeSelect)
            .render(layout.modes, buf);

        SwatchGrid::new(colors, &app.theme, &app.icons)
            .selected(selected)
            .focused(app.focus == Focus::Swatches)
            .render(layout.swatches, buf);

        HexList::new(colors, &app.theme)
            .selected(if app.focus == Focus::Swatches {
                selected
            } else {
                None
            })
            .render(layout.hex_list, buf);

        let hints = hints_for(app.focus);
        FooterHints::new(&hints, &app.theme, &app.icons)
            .focus(app.focus)
            .snackbar(app.snackbar.message(Instant::now()))
            .render(layout.footer, buf);
    }
}
