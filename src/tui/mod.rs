//! Terminal user interface for tomatui.
//!
//! The TUI is presentation plumbing: it renders the engine's current
//! snapshot and forwards key presses as intents. Built with ratatui and
//! crossterm. A 1 Hz virtual clock derived from the poll timeout drives
//! the session and notification tick channels.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::SettingsStore;
use crate::engine::Intent;
use crate::error::TomatuiError;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or draw.
pub fn run(store: SettingsStore) -> Result<(), TomatuiError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| TomatuiError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TomatuiError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TomatuiError::Terminal(format!("Failed to create terminal: {e}")))?;

    let mut app = App::new(store);
    let result = run_app(&mut terminal, &mut app);

    // Settings are flushed on every exit path, errors included.
    app.dispatch(Intent::Shutdown);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), TomatuiError> {
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TomatuiError::Terminal(format!("Failed to draw: {e}")))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if let Some(action) = event::handle_events(app, timeout)? {
            match action {
                event::Action::Quit => break,
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_second();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
