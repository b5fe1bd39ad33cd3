//! Scheme mode discovery.
//!
//! The set of available modes is only known after the first successful
//! fetch. [`ModeCatalog`] captures it once and never overwrites it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A selectable scheme mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeOption {
    /// Display label (mode name with the first letter capitalized).
    pub label: String,
    /// Query fragment to send back to the API.
    pub value: String,
}

impl ModeOption {
    /// Build an option from an API mode name and its query fragment.
    pub fn from_api(name: &str, value: impl Into<String>) -> Self {
        Self {
            label: capitalize_first(name),
            value: value.into(),
        }
    }
}

/// Uppercase the first character of a string, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Once-populated list of available modes.
#[derive(Debug, Clone, Default)]
pub struct ModeCatalog {
    options: Vec<ModeOption>,
    populated: bool,
}

impl ModeCatalog {
    /// Create an empty, unpopulated catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the catalog has been populated.
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Populate from a response's mode mapping.
    ///
    /// Returns `true` if this call populated the catalog, `false` if it was
    /// already populated (in which case nothing changes).
    pub fn populate(&mut self, modes: &IndexMap<String, String>) -> bool {
        if self.populated {
            return false;
        }

        self.options = modes
            .iter()
            .map(|(name, value)| ModeOption::from_api(name, value.clone()))
            .collect();
        self.populated = true;
        info!(count = self.options.len(), "mode catalog populated");
        true
    }

    /// The discovered options, in response order.
    pub fn options(&self) -> &[ModeOption] {
        &self.options
    }

    /// Number of discovered options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether there are no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Get an option by index.
    pub fn get(&self, index: usize) -> Option<&ModeOption> {
        self.options.get(index)
    }

    /// Find the index of the option with the given query value.
    pub fn position_of(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }
}
