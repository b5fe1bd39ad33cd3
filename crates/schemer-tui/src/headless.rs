//! Headless mode for the schemer TUI.
//!
//! This module provides a way to run the TUI without a real terminal,
//! enabling E2E testing and automation. Actions are sent via channels
//! and screen state is captured after each render. Copies go to an
//! in-memory clipboard.

use crate::app::{App, FetchState, Focus};
use crate::clipboard::{Clipboard, MemoryClipboard};
use crate::event::Action;
use crate::fetch_pool::{FetchPool, FetchResult};
use crate::{apply_effect, screens};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use schemer_engine::{Config, SchemeFetcher, Transport};
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Default terminal dimensions for headless mode.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// State captured from the headless TUI after each render.
#[derive(Debug, Clone, Default)]
pub struct HeadlessState {
    /// Text contents of the terminal buffer.
    pub screen_contents: String,
    /// Focused control.
    pub focus: Focus,
    /// Request state.
    pub fetch_state: FetchState,
    /// Hex values of the displayed swatches.
    pub colors: Vec<String>,
    /// Text last written to the clipboard.
    pub clipboard: Option<String>,
    /// Visible snackbar message.
    pub snackbar: Option<String>,
    /// Whether the TUI should quit.
    pub should_quit: bool,
    /// Whether help overlay is visible.
    pub show_help: bool,
}

/// Handle to control a headless TUI instance.
///
/// Use this to send actions and observe state changes.
pub struct HeadlessHandle {
    action_tx: mpsc::UnboundedSender<Action>,
    state_rx: watch::Receiver<HeadlessState>,
}

impl HeadlessHandle {
    /// Send an action to the TUI.
    ///
    /// Returns `true` if the action was sent successfully.
    pub fn send_action(&self, action: Action) -> bool {
        self.action_tx.send(action).is_ok()
    }

    /// Get the current state of the TUI.
    pub fn state(&self) -> HeadlessState {
        self.state_rx.borrow().clone()
    }

    /// Wait until a condition is met on the state.
    ///
    /// Returns the state when the condition is met, or `None` if timed out.
    pub async fn wait_for<F>(&mut self, condition: F, timeout: Duration) -> Option<HeadlessState>
    where
        F: Fn(&HeadlessState) -> bool,
    {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            let state = self.state();
            if condition(&state) {
                return Some(state);
            }

            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                return None;
            }

            if tokio::time::timeout(remaining, self.state_rx.changed())
                .await
                .is_err()
            {
                return None;
            }
        }
    }

    /// Wait for specific text to appear on screen.
    pub async fn wait_for_text(&mut self, text: &str, timeout: Duration) -> Option<HeadlessState> {
        self.wait_for(|s| s.screen_contents.contains(text), timeout)
            .await
    }

    /// Check if the TUI has quit.
    pub fn has_quit(&self) -> bool {
        self.state().should_quit
    }
}

/// Configuration for headless mode.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Terminal width.
    pub width: u16,
    /// Terminal height.
    pub height: u16,
    /// Tick rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_rate_ms: 50, // Faster tick rate for testing
        }
    }
}

/// Run the TUI in headless mode.
///
/// Starts from `hex` (or a random color), issues the first request through
/// `transport`, and returns a handle to control the TUI plus a join handle
/// for the background task.
///
/// # Example
///
/// ```ignore
/// let (mut handle, task) =
///     run_tui_headless(Config::default(), Some("ff0000".into()), transport, HeadlessConfig::default());
///
/// let state = handle.wait_for_text("#FF0000", Duration::from_secs(1)).await;
///
/// handle.send_action(Action::Quit);
/// task.await.unwrap();
/// ```
pub fn run_tui_headless<T: Transport + 'static>(
    app_config: Config,
    hex: Option<String>,
    transport: T,
    config: HeadlessConfig,
) -> (HeadlessHandle, JoinHandle<Result<(), String>>) {
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(HeadlessState::default());

    let task = tokio::spawn(async move {
        run_headless_loop(app_config, hex, transport, config, action_rx, state_tx)
            .await
            .map_err(|e| e.to_string())
    });

    let handle = HeadlessHandle {
        action_tx,
        state_rx,
    };

    (handle, task)
}

enum Wake {
    Action(Action),
    Fetched(FetchResult),
    Tick,
}

async fn run_headless_loop<T: Transport + 'static>(
    app_config: Config,
    hex: Option<String>,
    transport: T,
    config: HeadlessConfig,
    mut action_rx: mpsc::UnboundedReceiver<Action>,
    state_tx: watch::Sender<HeadlessState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let backend = TestBackend::new(config.width, config.height);
    let mut terminal = Terminal::new(backend)?;

    let mut app = match hex {
        Some(hex) => App::with_color(&app_config, &hex),
        None => App::new(&app_config),
    };
    let mut pool = FetchPool::new(SchemeFetcher::from_config(&app_config, transport));
    let mut clipboard = Clipboard::new(Some(MemoryClipboard::new()), MemoryClipboard::new());

    pool.spawn(app.begin_fetch());

    let tick_duration = Duration::from_millis(config.tick_rate_ms);

    loop {
        while let Some(result) = pool.try_next() {
            app.finish_fetch(result);
        }

        terminal.draw(|frame| {
            let area = frame.area();
            screens::draw(&app, area, frame.buffer_mut());
        })?;

        let now = Instant::now();
        let _ = state_tx.send(HeadlessState {
            screen_contents: buffer_to_string(terminal.backend().buffer()),
            focus: app.focus,
            fetch_state: app.fetch_state.clone(),
            colors: app.session.colors().iter().map(|c| c.hex.clone()).collect(),
            clipboard: clipboard
                .primary()
                .and_then(MemoryClipboard::text)
                .map(str::to_string),
            snackbar: app.snackbar.message(now).map(str::to_string),
            should_quit: app.should_quit,
            show_help: app.show_help,
        });

        if app.should_quit {
            pool.abort_all();
            break;
        }

        // Wait for an action, a completed request, or a tick
        let wake = tokio::select! {
            Some(action) = action_rx.recv() => Wake::Action(action),
            Some(result) = pool.next() => Wake::Fetched(result),
            () = tokio::time::sleep(tick_duration) => Wake::Tick,
        };

        match wake {
            Wake::Action(action) => {
                let effect = app.handle_action(action);
                apply_effect(&mut app, effect, &mut pool, &mut clipboard);
            }
            Wake::Fetched(result) => app.finish_fetch(result),
            Wake::Tick => app.tick(Instant::now()),
        }
    }

    Ok(())
}

/// Convert a terminal buffer to a string representation.
fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{StaticTransport, RED_MONOCHROME};

    const WAIT: Duration = Duration::from_secs(2);

    fn start(transport: StaticTransport) -> (HeadlessHandle, JoinHandle<Result<(), String>>) {
        run_tui_headless(
            Config::default(),
            Some("ff0000".into()),
            transport,
            HeadlessConfig::default(),
        )
    }

    #[test]
    fn test_headless_config_default() {
        let config = HeadlessConfig::default();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.tick_rate_ms, 50);
    }

    #[tokio::test]
    async fn test_first_fetch_renders_scheme() {
        let (mut handle, task) = start(StaticTransport::ok(RED_MONOCHROME));

        let state = handle
            .wait_for(|s| s.colors.len() == 5, WAIT)
            .await
            .expect("scheme should render");

        assert_eq!(state.colors[0], "#FF0000");
        for hex in ["#FF0000", "#CC0000", "#990000", "#660000", "#330000"] {
            assert!(state.screen_contents.contains(hex), "missing {hex}");
        }
        assert!(state.screen_contents.contains("Sangria"));
        assert!(state.screen_contents.contains("Triad"));
        assert_eq!(state.fetch_state, FetchState::Idle);

        handle.send_action(Action::Quit);
        task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_copy_from_swatches() {
        let (mut handle, task) = start(StaticTransport::ok(RED_MONOCHROME));
        handle.wait_for(|s| s.colors.len() == 5, WAIT).await.unwrap();

        handle.send_action(Action::NextFocus);
        handle.send_action(Action::NextFocus);
        handle.send_action(Action::Right);
        handle.send_action(Action::Select);

        let state = handle
            .wait_for(|s| s.clipboard.is_some(), WAIT)
            .await
            .expect("copy should land");

        assert_eq!(state.clipboard.as_deref(), Some("#CC0000"));
        assert_eq!(state.snackbar.as_deref(), Some("Copied #CC0000 to clipboard"));
        assert!(state.screen_contents.contains("Copied #CC0000 to clipboard"));

        handle.send_action(Action::Quit);
        task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_failed_fetch_is_shown() {
        let (mut handle, task) = start(StaticTransport::failing("connection refused"));

        let state = handle
            .wait_for(|s| matches!(s.fetch_state, FetchState::Failed(_)), WAIT)
            .await
            .expect("failure should surface");

        assert!(state.colors.is_empty());
        assert!(state.screen_contents.contains("Failed"));
        assert!(state.screen_contents.contains("No scheme yet"));

        handle.send_action(Action::Quit);
        task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_help_toggle_and_quit() {
        let (mut handle, task) = start(StaticTransport::ok(RED_MONOCHROME));

        handle.send_action(Action::Help);
        let state = handle.wait_for(|s| s.show_help, WAIT).await.unwrap();
        assert!(state.screen_contents.contains(" Help "));

        // Any key closes help without quitting
        handle.send_action(Action::Quit);
        handle.wait_for(|s| !s.show_help, WAIT).await.unwrap();
        assert!(!handle.has_quit());

        handle.send_action(Action::Quit);
        task.await.unwrap().unwrap();
    }

    #[test]
    fn test_buffer_to_string() {
        use ratatui::layout::Rect;
        use ratatui::style::Style;

        let area = Rect::new(0, 0, 10, 2);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", Style::default());
        buffer.set_string(0, 1, "World", Style::default());

        let result = buffer_to_string(&buffer);
        assert!(result.contains("Hello"));
        assert!(result.contains("World"));
    }
}
