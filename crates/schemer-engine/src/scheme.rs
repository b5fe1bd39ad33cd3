//! Color scheme data model and wire decoding.
//!
//! The color API wraps every scalar in an object (`{"value": ...}`) and
//! advertises the other available schemes under `_links.schemes`. This
//! module flattens that into [`SchemeResponse`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One swatch of a scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Display hex value as returned by the API (e.g. `#FF0000`).
    pub hex: String,
    /// Human-readable color name.
    pub name: String,
}

impl ColorEntry {
    /// Create a new color entry.
    pub fn new(hex: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            name: name.into(),
        }
    }
}

/// A decoded scheme response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeResponse {
    /// Colors in API order.
    pub colors: Vec<ColorEntry>,
    /// Mode name to query fragment, in response order.
    pub available_modes: IndexMap<String, String>,
}

impl SchemeResponse {
    /// Decode a response body from the color API.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let wire: WireScheme = serde_json::from_str(body)?;
        Ok(wire.into())
    }
}

#[derive(Debug, Deserialize)]
struct WireValue {
    value: String,
}

#[derive(Debug, Deserialize)]
struct WireColor {
    hex: WireValue,
    name: WireValue,
}

#[derive(Debug, Default, Deserialize)]
struct WireLinks {
    #[serde(default)]
    schemes: IndexMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct WireScheme {
    colors: Vec<WireColor>,
    #[serde(default, rename = "_links")]
    links: WireLinks,
}

impl From<WireScheme> for SchemeResponse {
    fn from(wire: WireScheme) -> Self {
        Self {
            colors: wire
                .colors
                .into_iter()
                .map(|c| ColorEntry::new(c.hex.value, c.name.value))
                .collect(),
            available_modes: wire.links.schemes,
        }
    }
}
