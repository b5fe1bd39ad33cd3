//! UI widgets for the TUI.
//!
//! This module provides:
//! - [`StatusBar`] - Top status bar with request state, color and mode
//! - [`ColorInput`] - Base color entry
//! - [`ModeSelect`] - Discovered scheme modes
//! - [`SwatchGrid`] / [`HexList`] - The rendered scheme
//! - [`FooterHints`] - Bottom keybinding hints and copy confirmation

mod color_input;
mod footer_hints;
mod hex_list;
mod mode_select;
mod status_bar;
mod swatches;

pub use color_input::{ColorInput, ColorInputState, MAX_INPUT_LEN};
pub use footer_hints::{hints_for, FooterHints, KeyHint};
pub use hex_list::HexList;
pub use mode_select::ModeSelect;
pub use status_bar::{StatusBar, StatusBarContent};
pub use swatches::{columns, SwatchGrid};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max` display columns, adding `…` when cut.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}
