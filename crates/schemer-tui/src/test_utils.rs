//! Test utilities for schemer-tui snapshot and integration testing.
//!
//! This module provides helper functions for creating test apps, canned
//! transports, and converting buffers to strings for snapshot testing.

use crate::app::App;
use crate::screens::Screen as ScreenTrait;
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};
use schemer_engine::{SchemeError, SchemeResponse, Transport};
use std::time::Duration;

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// A scheme body in the color API's shape, seeded with `#FF0000`.
pub const RED_MONOCHROME: &str = r##"{
    "colors": [
        {"hex": {"value": "#FF0000"}, "name": {"value": "Red"}},
        {"hex": {"value": "#CC0000"}, "name": {"value": "Free Speech Red"}},
        {"hex": {"value": "#990000"}, "name": {"value": "Sangria"}},
        {"hex": {"value": "#660000"}, "name": {"value": "Maroon"}},
        {"hex": {"value": "#330000"}, "name": {"value": "Temptress"}}
    ],
    "_links": {
        "schemes": {
            "monochrome": "mode=monochrome",
            "analogic": "mode=analogic",
            "complement": "mode=complement",
            "triad": "mode=triad"
        }
    }
}"##;

/// Build a single-color body whose only swatch is `#{hex}`.
pub fn single_color_body(hex: &str) -> String {
    format!(
        r##"{{"colors": [{{"hex": {{"value": "#{hex}"}}, "name": {{"value": "Seed"}}}}], "_links": {{"schemes": {{"monochrome": "mode=monochrome"}}}}}}"##
    )
}

/// Transport returning canned results.
#[derive(Debug, Clone)]
pub enum StaticTransport {
    /// Always return this body.
    Ok(String),
    /// Always fail with a network error.
    Failing(String),
    /// Echo the requested color after a delay: 200ms for `aaaaaa`, 50ms
    /// otherwise.
    DelayedByHex,
}

impl StaticTransport {
    pub fn ok(body: &str) -> Self {
        Self::Ok(body.to_string())
    }

    pub fn failing(reason: &str) -> Self {
        Self::Failing(reason.to_string())
    }

    pub fn delayed_by_hex() -> Self {
        Self::DelayedByHex
    }
}

/// Extract the `hex` query parameter from a request URL.
fn requested_hex(url: &str) -> String {
    url.split_once("hex=")
        .map(|(_, rest)| rest.split('&').next().unwrap_or_default().to_string())
        .unwrap_or_default()
}

impl Transport for StaticTransport {
    async fn get(&self, url: &str) -> Result<String, SchemeError> {
        match self {
            Self::Ok(body) => Ok(body.clone()),
            Self::Failing(reason) => Err(SchemeError::network(url, reason.clone())),
            Self::DelayedByHex => {
                let hex = requested_hex(url);
                let delay = if hex == "aaaaaa" { 200 } else { 50 };
                tokio::time::sleep(Duration::from_millis(delay)).await;
                Ok(single_color_body(&hex))
            }
        }
    }
}

/// Create a test terminal with the default dimensions (80x24).
pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Create a test app with base color `#ff0000` and no scheme yet.
pub fn create_test_app() -> App {
    App::new_for_test()
}

/// Create a test app that has applied [`RED_MONOCHROME`].
pub fn create_test_app_with_scheme() -> App {
    let mut app = App::new_for_test();
    app.begin_fetch();
    app.finish_fetch(Ok(SchemeResponse::from_json(RED_MONOCHROME).unwrap()));
    app
}

/// Convert a buffer to a string representation for snapshot testing.
///
/// This produces a simple text representation of the buffer content,
/// suitable for snapshot comparison.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render a screen to a buffer and return it as a string.
pub fn render_screen_to_string<S: ScreenTrait>(screen: &S, app: &App) -> String {
    render_screen_to_string_sized(screen, app, TEST_WIDTH, TEST_HEIGHT)
}

/// Render a screen at a custom size and return it as a string.
pub fn render_screen_to_string_sized<S: ScreenTrait>(
    screen: &S,
    app: &App,
    width: u16,
    height: u16,
) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    screen.render(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal();
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_create_test_app_with_scheme() {
        let app = create_test_app_with_scheme();
        assert_eq!(app.session.colors().len(), 5);
        assert_eq!(app.session.catalog().len(), 4);
    }

    #[test]
    fn test_requested_hex() {
        assert_eq!(requested_hex("http://x/scheme?hex=0047ab&mode=triad"), "0047ab");
        assert_eq!(requested_hex("http://x/scheme"), "");
    }

    #[test]
    fn test_single_color_body_decodes() {
        let response = SchemeResponse::from_json(&single_color_body("abcdef")).unwrap();
        assert_eq!(response.colors[0].hex, "#abcdef");
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        let result = buffer_to_string(&buffer);
        assert!(result.contains("Hello"));
        assert!(result.contains("World"));
    }
}
