//! Screen definitions for the schemer TUI.

pub mod browser;

use crate::app::App;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen to the buffer.
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Render the whole UI: the browser plus the help overlay when open.
pub fn draw(app: &App, area: Rect, buf: &mut Buffer) {
    browser::BrowserScreen.render(app, area, buf);
    if app.show_help {
        render_help_overlay(&app.theme, area, buf);
    }
}

/// Create a centered rect with fixed dimensions.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the help overlay.
pub fn render_help_overlay(theme: &Theme, area: Rect, buf: &mut Buffer) {
    let help_text = r"
  Tab / Shift+Tab   Next/prev control
  Enter / g         Fetch scheme
  r                 Random color
  j/k or Up/Down    Choose mode
  h/l or Left/Right Choose swatch
  Enter / y         Copy swatch hex
  q / Esc           Quit
  ?                 Toggle this help

  [Press any key to close]
";

    let width = 46.min(area.width.saturating_sub(4));
    let height = 14.min(area.height.saturating_sub(2));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(theme.primary))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().fg(theme.text).bg(theme.base));

    Paragraph::new(help_text).block(block).render(overlay_area, buf);
}
