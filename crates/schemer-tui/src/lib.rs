//! schemer-tui: Terminal UI for the schemer color-scheme explorer
//!
//! This crate provides the TUI layer for schemer, including:
//! - The scheme browser (color input, mode list, swatches, hex labels)
//! - Clipboard copy with an OSC 52 fallback and a transient confirmation
//! - Headless mode for testing and automation

mod app;
pub mod clipboard;
mod event;
mod fetch_pool;
pub mod headless;
mod screens;
mod snackbar;
#[cfg(test)]
pub mod test_utils;
mod theme;
mod widgets;

pub use app::{App, Effect, FetchRequest, FetchState, Focus};
pub use event::{Action, Event, EventHandler};
pub use schemer_engine;

use clipboard::{Clipboard, ClipboardBackend, TerminalClipboard};
use crossterm::{
    cursor::Show as ShowCursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fetch_pool::FetchPool;
use ratatui::{backend::CrosstermBackend, Terminal};
use schemer_engine::{Config, CurlTransport, SchemeFetcher, Transport};
use std::io::{self, stdout};
use std::time::Instant;
use tracing::info;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// Starts from `hex` (or a random color) and immediately requests its
/// scheme. Sets up the terminal, runs the event loop, and restores the
/// terminal on exit.
pub async fn run_tui(config: Config, hex: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let transport = CurlTransport::discover()?.timeout(config.timeout());
    let fetcher = SchemeFetcher::from_config(&config, transport);

    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = match hex {
        Some(hex) => App::with_color(&config, &hex),
        None => App::new(&config),
    };
    let mut pool = FetchPool::new(fetcher);
    let mut clipboard = TerminalClipboard::for_terminal();
    let mut events = EventHandler::new(config.tick_rate_ms);

    info!(color = app.color_input.value(), "starting schemer");
    pool.spawn(app.begin_fetch());

    let result = run_loop(&mut terminal, &mut app, &mut events, &mut pool, &mut clipboard).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop<T: Transport + 'static>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    pool: &mut FetchPool<T>,
    clipboard: &mut TerminalClipboard,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Apply completed requests in completion order
        while let Some(result) = pool.try_next() {
            app.finish_fetch(result);
        }

        terminal.draw(|frame| {
            let area = frame.area();
            screens::draw(app, area, frame.buffer_mut());
        })?;

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    let action = event::key_to_action(key, app.is_typing());
                    let effect = app.handle_action(action);
                    apply_effect(app, effect, pool, clipboard);
                }
                Event::Tick => app.tick(Instant::now()),
                Event::Resize(_, _) => {
                    // Terminal will handle resize automatically
                }
            }
        }

        if app.should_quit {
            pool.abort_all();
            break;
        }
    }

    Ok(())
}

/// Carry out the side effect of an action.
pub(crate) fn apply_effect<T, P, F>(
    app: &mut App,
    effect: Effect,
    pool: &mut FetchPool<T>,
    clipboard: &mut Clipboard<P, F>,
) where
    T: Transport + 'static,
    P: ClipboardBackend,
    F: ClipboardBackend,
{
    match effect {
        Effect::None => {}
        Effect::Fetch(request) => pool.spawn(request),
        Effect::Copy(value) => {
            let result = clipboard.copy(&value);
            app.finish_copy(&value, result, Instant::now());
        }
    }
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
