//! Application context for a scheme browsing session.
//!
//! A session holds the mode catalog, the currently selected mode, and the
//! colors of the last applied response. Responses are applied in the order
//! they are handed in, so with several requests in flight the last one to
//! complete wins.

use crate::config::Config;
use crate::modes::{ModeCatalog, ModeOption};
use crate::scheme::{ColorEntry, SchemeResponse};

/// What changed when a response was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// Number of colors now displayed.
    pub colors: usize,
    /// Whether this response populated the mode catalog.
    pub populated_modes: bool,
}

/// Mutable state shared by every front end.
#[derive(Debug, Clone)]
pub struct SchemeSession {
    catalog: ModeCatalog,
    default_mode: String,
    selected_mode: Option<usize>,
    colors: Vec<ColorEntry>,
}

impl SchemeSession {
    /// Create a session that requests `default_mode` until modes are known.
    pub fn new(default_mode: impl Into<String>) -> Self {
        Self {
            catalog: ModeCatalog::new(),
            default_mode: default_mode.into(),
            selected_mode: None,
            colors: Vec::new(),
        }
    }

    /// Create a session from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_mode.clone())
    }

    /// Apply a successful response.
    ///
    /// Colors are always replaced; the mode catalog is only filled the
    /// first time.
    pub fn apply(&mut self, response: SchemeResponse) -> Applied {
        let populated_modes = self.catalog.populate(&response.available_modes);
        if populated_modes {
            // Keep pointing at the default mode if the API lists it.
            self.selected_mode = self.catalog.position_of(&self.default_mode);
        }
        self.colors = response.colors;

        Applied {
            colors: self.colors.len(),
            populated_modes,
        }
    }

    /// The mode catalog.
    pub fn catalog(&self) -> &ModeCatalog {
        &self.catalog
    }

    /// Colors from the last applied response.
    pub fn colors(&self) -> &[ColorEntry] {
        &self.colors
    }

    /// Index of the selected mode in the catalog, if one is selected.
    pub fn selected_mode_index(&self) -> Option<usize> {
        self.selected_mode
    }

    /// The selected mode option, if one is selected.
    pub fn selected_option(&self) -> Option<&ModeOption> {
        self.selected_mode.and_then(|i| self.catalog.get(i))
    }

    /// Query fragment for the next request.
    pub fn current_mode(&self) -> &str {
        self.selected_option()
            .map_or(self.default_mode.as_str(), |o| o.value.as_str())
    }

    /// Label of the current mode for display.
    pub fn current_mode_label(&self) -> String {
        match self.selected_option() {
            Some(option) => option.label.clone(),
            None => self.default_mode.clone(),
        }
    }

    /// Select a mode by catalog index. Out-of-range indices are ignored.
    pub fn select_mode(&mut self, index: usize) -> bool {
        if index < self.catalog.len() {
            self.selected_mode = Some(index);
            true
        } else {
            false
        }
    }

    /// Move the mode selection by `delta`, clamped to the catalog.
    pub fn step_mode(&mut self, delta: isize) {
        if self.catalog.is_empty() {
            return;
        }
        let last = self.catalog.len() - 1;
        let next = match self.selected_mode {
            Some(current) => current.saturating_add_signed(delta).min(last),
            None if delta < 0 => last,
            None => 0,
        };
        self.selected_mode = Some(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn response(hexes: &[&str], modes: &[(&str, &str)]) -> SchemeResponse {
        SchemeResponse {
            colors: hexes
                .iter()
                .map(|h| ColorEntry::new(*h, format!("name {h}")))
                .collect(),
            available_modes: modes
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect::<IndexMap<_, _>>(),
        }
    }

    #[test]
    fn test_uses_default_mode_before_discovery() {
        let session = SchemeSession::new("mode=monochrome");
        assert_eq!(session.current_mode(), "mode=monochrome");
        assert!(session.colors().is_empty());
        assert!(!session.catalog().is_populated());
    }

    #[test]
    fn test_apply_populates_once_and_replaces_colors() {
        let mut session = SchemeSession::new("mode=monochrome");

        let first = session.apply(response(
            &["#FF0000", "#CC0000"],
            &[("monochrome", "mode=monochrome"), ("quad", "mode=quad")],
        ));
        assert_eq!(
            first,
            Applied {
                colors: 2,
                populated_modes: true
            }
        );
        assert_eq!(session.selected_mode_index(), Some(0));

        let second = session.apply(response(&["#00FF00"], &[("triad", "mode=triad")]));
        assert!(!second.populated_modes);
        assert_eq!(session.colors().len(), 1);
        assert_eq!(session.colors()[0].hex, "#00FF00");
        assert_eq!(session.catalog().len(), 2);
        assert_eq!(session.catalog().get(1).unwrap().label, "Quad");
    }

    #[test]
    fn test_last_applied_response_wins() {
        let mut session = SchemeSession::new("mode=monochrome");
        session.apply(response(&["#111111"], &[]));
        session.apply(response(&["#222222", "#333333"], &[]));
        assert_eq!(session.colors()[0].hex, "#222222");
    }

    #[test]
    fn test_mode_selection() {
        let mut session = SchemeSession::new("mode=unknown");
        session.apply(response(
            &[],
            &[("analogic", "a"), ("complement", "c"), ("triad", "t")],
        ));
        // Default not listed: nothing selected yet
        assert_eq!(session.selected_mode_index(), None);
        assert_eq!(session.current_mode(), "mode=unknown");

        session.step_mode(1);
        assert_eq!(session.current_mode(), "a");
        session.step_mode(5);
        assert_eq!(session.current_mode(), "t");
        session.step_mode(-1);
        assert_eq!(session.current_mode_label(), "Complement");
        session.step_mode(-10);
        assert_eq!(session.current_mode(), "a");

        assert!(session.select_mode(2));
        assert!(!session.select_mode(3));
        assert_eq!(session.current_mode(), "t");
    }

    #[test]
    fn test_path_style_modes_leave_nothing_selected() {
        let mut session = SchemeSession::new("mode=monochrome");
        session.apply(response(
            &["#FF0000"],
            &[
                ("monochrome", "/scheme?hex=FF0000&mode=monochrome&count=5"),
                ("triad", "/scheme?hex=FF0000&mode=triad&count=5"),
            ],
        ));

        assert_eq!(session.selected_mode_index(), None);
        assert_eq!(session.current_mode(), "mode=monochrome");
    }
}
