//! User and clock intents consumed by the engine.

/// A discrete intent delivered to [`crate::engine::PomodoroEngine::handle`].
///
/// The presentation layer owns the mapping from raw input events to these
/// variants; the engine processes each one to completion before the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Start a focus session, or resume from a paused state.
    Start,
    /// Pause the running interval.
    Pause,
    /// Stop everything and return to the idle state.
    Reset,
    /// Set the focus duration in minutes (clamped to 15-60).
    SetFocusDuration(u32),
    /// Set the break duration in minutes (clamped to 5-30).
    SetBreakDuration(u32),
    /// Switch between the dark and light themes.
    ToggleTheme(bool),
    /// Enable or mute the alarm.
    ToggleSound(bool),
    /// One second elapsed on the session clock.
    SessionTick,
    /// One second elapsed on the notification countdown.
    NotificationTick,
    /// The application is exiting; flush settings.
    Shutdown,
}
