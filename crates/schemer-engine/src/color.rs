//! Base color helpers.

use rand::Rng;

/// Largest 24-bit color value (`ffffff`).
pub const MAX_COLOR: u32 = 0x00FF_FFFF;

/// Strip a single leading `#` from a color string.
///
/// The scheme endpoint expects bare hex digits; anything else is passed
/// through untouched and left to the API to accept or reject.
pub fn strip_marker(color: &str) -> &str {
    let trimmed = color.trim();
    trimmed.strip_prefix('#').unwrap_or(trimmed)
}

/// Format a 24-bit value as six lowercase hex digits.
pub fn to_hex(value: u32) -> String {
    format!("{:06x}", value & MAX_COLOR)
}

/// Pick a random base color as six lowercase hex digits.
pub fn random_hex() -> String {
    random_hex_with(&mut rand::rng())
}

/// Pick a random base color using the given generator.
pub fn random_hex_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    to_hex(rng.random_range(0..=MAX_COLOR))
}

/// Parse a hex color (with or without `#`) into RGB components.
///
/// Accepts six-digit and three-digit shorthand forms.
pub fn parse_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let digits = strip_marker(color);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        6 => {
            let value = u32::from_str_radix(digits, 16).ok()?;
            let [_, r, g, b] = value.to_be_bytes();
            Some((r, g, b))
        }
        3 => {
            let mut channels = digits
                .chars()
                .filter_map(|c| c.to_digit(16))
                .map(|d| u8::try_from(d * 17).unwrap_or(u8::MAX));
            Some((channels.next()?, channels.next()?, channels.next()?))
        }
        _ => None,
    }
}
