//! Palette for the chrome around the swatches.
//!
//! Swatches are drawn in their own colors; these colors only cover the
//! borders, labels, status line and footer.

use ratatui::style::Color;

#[allow(clippy::cast_possible_truncation)]
const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Chrome colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Overlay background.
    pub base: Color,
    /// Status line, footer, and swatches whose hex can't be parsed.
    pub surface: Color,

    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    /// Titles, key names and the selected mode.
    pub primary: Color,
    /// Ready indicator and copy confirmation.
    pub success: Color,
    pub error: Color,
    /// Loading indicator and color count.
    pub info: Color,

    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (Catppuccin Mocha tones).
    pub fn dark() -> Self {
        Self {
            base: rgb(0x1e_1e2e),
            surface: rgb(0x31_3244),
            text: rgb(0xcd_d6f4),
            subtext: rgb(0xa6_adc8),
            muted: rgb(0x6c_7086),
            primary: rgb(0xb4_befe),
            success: rgb(0xa6_e3a1),
            error: rgb(0xf3_8ba8),
            info: rgb(0x89_b4fa),
            border: rgb(0x45_475a),
            border_focused: rgb(0xb4_befe),
        }
    }

    /// Theme used when `NO_COLOR` is set: named terminal colors only, so the
    /// terminal's own palette decides what they look like.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Reset,
            text: Color::White,
            subtext: Color::Gray,
            muted: Color::DarkGray,
            primary: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            info: Color::Blue,
            border: Color::White,
            border_focused: Color::Cyan,
        }
    }
}
