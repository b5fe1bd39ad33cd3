//! Application state and update logic for the schemer TUI.

use crate::clipboard::{ClipboardError, CopyPath};
use crate::event::Action;
use crate::snackbar::Snackbar;
use crate::theme::{IconMode, IconSet, Theme};
use crate::widgets::ColorInputState;
use schemer_engine::{random_hex, strip_marker, Config, SchemeError, SchemeResponse, SchemeSession};
use std::time::Instant;
use tracing::warn;

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    ColorInput,
    ModeSelect,
    Swatches,
}

impl Focus {
    /// Next control in tab order.
    pub fn next(self) -> Self {
        match self {
            Self::ColorInput => Self::ModeSelect,
            Self::ModeSelect => Self::Swatches,
            Self::Swatches => Self::ColorInput,
        }
    }

    /// Previous control in tab order.
    pub fn prev(self) -> Self {
        match self {
            Self::ColorInput => Self::Swatches,
            Self::ModeSelect => Self::ColorInput,
            Self::Swatches => Self::ModeSelect,
        }
    }
}

/// State of scheme requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    /// Nothing in flight, last request (if any) succeeded.
    #[default]
    Idle,
    /// At least one request is in flight.
    Loading,
    /// The last request to complete failed.
    Failed(String),
}

/// A scheme request to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Base color without the leading `#`.
    pub hex: String,
    /// Mode query fragment.
    pub mode: String,
}

/// Side effect requested by an action, carried out by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch(FetchRequest),
    Copy(String),
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Focused control.
    pub focus: Focus,

    /// Base color being edited.
    pub color_input: ColorInputState,

    /// Mode catalog, selected mode and current colors.
    pub session: SchemeSession,

    /// Index of the selected swatch.
    pub selected_swatch: usize,

    /// Copy confirmation.
    pub snackbar: Snackbar,

    /// Request state shown in the status bar.
    pub fetch_state: FetchState,

    /// Number of requests in flight.
    pub in_flight: usize,

    /// Last clipboard failure, shown in the status bar until the next copy.
    pub clipboard_error: Option<String>,

    /// Tick counter for animations.
    pub tick: usize,

    /// Theme colors.
    pub theme: Theme,

    /// Icon set.
    pub icons: IconSet,
}

impl App {
    /// Create a new app with a random base color.
    pub fn new(config: &Config) -> Self {
        Self::with_color(config, &random_hex())
    }

    /// Create a new app starting from `hex`.
    pub fn with_color(config: &Config, hex: &str) -> Self {
        let icon_mode = IconMode::from_env();
        let theme = match icon_mode {
            IconMode::Ascii => Theme::high_contrast(),
            IconMode::Unicode => Theme::default(),
        };

        Self {
            should_quit: false,
            show_help: false,
            focus: Focus::default(),
            color_input: ColorInputState::with_value(format!("#{}", strip_marker(hex))),
            session: SchemeSession::from_config(config),
            selected_swatch: 0,
            snackbar: Snackbar::new(config.snackbar_duration()),
            fetch_state: FetchState::default(),
            in_flight: 0,
            clipboard_error: None,
            tick: 0,
            theme,
            icons: IconSet::new(icon_mode),
        }
    }

    /// Create an app with fixed, deterministic state for tests.
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        let mut app = Self::with_color(&Config::default(), "ff0000");
        app.theme = Theme::default();
        app.icons = IconSet::new(IconMode::Unicode);
        app
    }

    /// Whether key presses should go to the color input.
    pub fn is_typing(&self) -> bool {
        self.focus == Focus::ColorInput && !self.show_help
    }

    /// Handle an action, returning any side effect the loop should run.
    pub fn handle_action(&mut self, action: Action) -> Effect {
        if self.show_help {
            // Any key closes help
            if action != Action::None {
                self.show_help = false;
            }
            return Effect::None;
        }

        match action {
            Action::Quit | Action::Back => {
                self.should_quit = true;
                Effect::None
            }
            Action::Help => {
                self.show_help = true;
                Effect::None
            }
            Action::Select => match self.focus {
                Focus::ColorInput | Focus::ModeSelect => self.fetch_effect(),
                Focus::Swatches => self.copy_effect(),
            },
            Action::Copy => self.copy_effect(),
            Action::Fetch => self.fetch_effect(),
            Action::Random => {
                self.color_input = ColorInputState::with_value(format!("#{}", random_hex()));
                self.fetch_effect()
            }
            Action::Up => {
                if self.focus == Focus::ModeSelect {
                    self.session.step_mode(-1);
                }
                Effect::None
            }
            Action::Down => {
                if self.focus == Focus::ModeSelect {
                    self.session.step_mode(1);
                }
                Effect::None
            }
            Action::Left => {
                if self.focus == Focus::Swatches {
                    self.selected_swatch = self.selected_swatch.saturating_sub(1);
                }
                Effect::None
            }
            Action::Right => {
                if self.focus == Focus::Swatches {
                    let last = self.session.colors().len().saturating_sub(1);
                    self.selected_swatch = (self.selected_swatch + 1).min(last);
                }
                Effect::None
            }
            Action::NextFocus => {
                self.focus = self.focus.next();
                Effect::None
            }
            Action::PrevFocus => {
                self.focus = self.focus.prev();
                Effect::None
            }
            Action::Input(c) => {
                if self.focus == Focus::ColorInput {
                    self.color_input.insert(c);
                }
                Effect::None
            }
            Action::Backspace => {
                if self.focus == Focus::ColorInput {
                    self.color_input.backspace();
                }
                Effect::None
            }
            Action::None => Effect::None,
        }
    }

    /// Start a request for the current color and mode.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.in_flight += 1;
        self.fetch_state = FetchState::Loading;
        FetchRequest {
            hex: strip_marker(self.color_input.value()).to_string(),
            mode: self.session.current_mode().to_string(),
        }
    }

    fn fetch_effect(&mut self) -> Effect {
        Effect::Fetch(self.begin_fetch())
    }

    fn copy_effect(&self) -> Effect {
        self.selected_color_hex()
            .map_or(Effect::None, |hex| Effect::Copy(hex.to_string()))
    }

    /// Apply the result of a completed request.
    ///
    /// Results are applied in the order they complete; a stale request that
    /// finishes last overwrites a newer one.
    pub fn finish_fetch(&mut self, result: Result<SchemeResponse, SchemeError>) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Ok(response) => {
                let applied = self.session.apply(response);
                if self.selected_swatch >= applied.colors {
                    self.selected_swatch = applied.colors.saturating_sub(1);
                }
                self.fetch_state = if self.in_flight > 0 {
                    FetchState::Loading
                } else {
                    FetchState::Idle
                };
            }
            Err(e) => {
                warn!(error = %e, "fetch failed");
                self.fetch_state = FetchState::Failed(e.to_string());
            }
        }
    }

    /// Record the outcome of a copy.
    pub fn finish_copy(
        &mut self,
        value: &str,
        result: Result<CopyPath, ClipboardError>,
        now: Instant,
    ) {
        match result {
            Ok(_) => {
                self.clipboard_error = None;
                self.snackbar
                    .show(format!("Copied {value} to clipboard"), now);
            }
            Err(e) => {
                warn!(error = %e, "copy failed");
                self.clipboard_error = Some(e.to_string());
            }
        }
    }

    /// Hex of the selected swatch, if there are any swatches.
    pub fn selected_color_hex(&self) -> Option<&str> {
        self.session
            .colors()
            .get(self.selected_swatch)
            .map(|c| c.hex.as_str())
    }

    /// Periodic update.
    pub fn tick(&mut self, now: Instant) {
        self.tick = self.tick.wrapping_add(1);
        self.snackbar.tick(now);
    }
}
