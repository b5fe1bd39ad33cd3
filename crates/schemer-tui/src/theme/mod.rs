//! Theme components for the TUI.
//!
//! This module provides:
//! - [`Theme`] - Chrome palette (dark / high contrast)
//! - [`IconSet`] - Icons with Unicode/ASCII modes
//! - [`swatch_color`] / [`label_color`] - Terminal colors for swatches

mod colors;
mod icons;
mod swatch;

pub use colors::Theme;
pub use icons::{IconMode, IconSet};
pub use swatch::{label_color, swatch_color};
