//! Terminal colors for scheme swatches.

use ratatui::style::Color;
use schemer_engine::parse_rgb;

/// Background color for a swatch, or `None` if the hex value can't be parsed.
pub fn swatch_color(hex: &str) -> Option<Color> {
    parse_rgb(hex).map(|(r, g, b)| Color::Rgb(r, g, b))
}

/// Black or white, whichever reads better on top of `hex`.
///
/// Uses the Rec. 601 luma weights.
pub fn label_color(hex: &str) -> Color {
    match parse_rgb(hex) {
        Some((r, g, b)) => {
            let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
            if luma >= 128_000 {
                Color::Black
            } else {
                Color::White
            }
        }
        None => Color::White,
    }
}
