//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::config::Settings;
use crate::engine::{Intent, TimerState};
use crate::error::TomatuiError;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Handle terminal events, waiting up to `timeout` for one to arrive.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App, timeout: Duration) -> Result<Option<Action>, TomatuiError> {
    if event::poll(timeout)
        .map_err(|e| TomatuiError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| TomatuiError::Terminal(format!("Event read failed: {e}")))?
        {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }

            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

                KeyCode::Char('?') => {
                    app.status = Some(
                        "s:start | p:pause | space:start/pause | r:reset | \
                         ←/→:focus | ↓/↑:break | d:theme | m:sound | q:quit"
                            .to_string(),
                    );
                }

                code => {
                    if let Some(intent) =
                        key_to_intent(code, app.snapshot().state, app.settings())
                    {
                        app.clear_status();
                        app.dispatch(intent);
                    }
                }
            }
        }
    }

    Ok(None)
}

/// Map a key press to an engine intent.
///
/// The presentation layer owns this mapping; the engine only ever sees the
/// closed intent set.
fn key_to_intent(code: KeyCode, state: TimerState, settings: &Settings) -> Option<Intent> {
    match code {
        KeyCode::Char('s') | KeyCode::Enter => Some(Intent::Start),
        KeyCode::Char('p') => Some(Intent::Pause),
        KeyCode::Char(' ') => {
            // Space toggles between starting and pausing.
            if state.is_running() {
                Some(Intent::Pause)
            } else {
                Some(Intent::Start)
            }
        }
        KeyCode::Char('r') => Some(Intent::Reset),

        // Duration sliders; the engine clamps to the valid ranges.
        KeyCode::Left => Some(Intent::SetFocusDuration(
            settings.focus_minutes.saturating_sub(1),
        )),
        KeyCode::Right => Some(Intent::SetFocusDuration(
            settings.focus_minutes.saturating_add(1),
        )),
        KeyCode::Down => Some(Intent::SetBreakDuration(
            settings.break_minutes.saturating_sub(1),
        )),
        KeyCode::Up => Some(Intent::SetBreakDuration(
            settings.break_minutes.saturating_add(1),
        )),

        KeyCode::Char('d') => Some(Intent::ToggleTheme(!settings.dark_mode)),
        KeyCode::Char('m') => Some(Intent::ToggleSound(!settings.sound_enabled)),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Settings {
        Settings::default()
    }

    #[test]
    fn test_start_keys() {
        let settings = defaults();
        assert_eq!(
            key_to_intent(KeyCode::Char('s'), TimerState::Ready, &settings),
            Some(Intent::Start)
        );
        assert_eq!(
            key_to_intent(KeyCode::Enter, TimerState::PausedFocus, &settings),
            Some(Intent::Start)
        );
    }

    #[test]
    fn test_space_toggles_by_state() {
        let settings = defaults();
        assert_eq!(
            key_to_intent(KeyCode::Char(' '), TimerState::Ready, &settings),
            Some(Intent::Start)
        );
        assert_eq!(
            key_to_intent(KeyCode::Char(' '), TimerState::RunningFocus, &settings),
            Some(Intent::Pause)
        );
        assert_eq!(
            key_to_intent(KeyCode::Char(' '), TimerState::PausedBreak, &settings),
            Some(Intent::Start)
        );
    }

    #[test]
    fn test_slider_keys_step_from_current_values() {
        let mut settings = defaults();
        settings.focus_minutes = 30;
        settings.break_minutes = 10;

        assert_eq!(
            key_to_intent(KeyCode::Right, TimerState::Ready, &settings),
            Some(Intent::SetFocusDuration(31))
        );
        assert_eq!(
            key_to_intent(KeyCode::Left, TimerState::Ready, &settings),
            Some(Intent::SetFocusDuration(29))
        );
        assert_eq!(
            key_to_intent(KeyCode::Up, TimerState::Ready, &settings),
            Some(Intent::SetBreakDuration(11))
        );
        assert_eq!(
            key_to_intent(KeyCode::Down, TimerState::Ready, &settings),
            Some(Intent::SetBreakDuration(9))
        );
    }

    #[test]
    fn test_toggle_keys_invert_settings() {
        let settings = defaults();
        assert_eq!(
            key_to_intent(KeyCode::Char('d'), TimerState::Ready, &settings),
            Some(Intent::ToggleTheme(true))
        );
        assert_eq!(
            key_to_intent(KeyCode::Char('m'), TimerState::Ready, &settings),
            Some(Intent::ToggleSound(false))
        );
    }

    #[test]
    fn test_unmapped_key() {
        let settings = defaults();
        assert_eq!(
            key_to_intent(KeyCode::Char('z'), TimerState::Ready, &settings),
            None
        );
    }
}
