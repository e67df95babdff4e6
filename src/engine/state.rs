//! Engine state types and render-facing projections.

use serde::Serialize;

/// The session state machine's current node.
///
/// Exactly one value holds at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerState {
    /// Idle; no interval has been started.
    Ready,
    /// A focus interval is counting down.
    RunningFocus,
    /// A break interval is counting down.
    RunningBreak,
    /// A focus interval is paused.
    PausedFocus,
    /// A break interval is paused.
    PausedBreak,
}

impl TimerState {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::RunningFocus => "FOCUS",
            Self::RunningBreak => "BREAK",
            Self::PausedFocus => "PAUSED (FOCUS)",
            Self::PausedBreak => "PAUSED (BREAK)",
        }
    }

    /// Check if an interval is actively counting down.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::RunningFocus | Self::RunningBreak)
    }

    /// Check if an interval is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        matches!(self, Self::PausedFocus | Self::PausedBreak)
    }
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Immutable projection of engine state for rendering.
///
/// Recomputed on every tick or intent; consumers never mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngineSnapshot {
    /// Current state machine node.
    pub state: TimerState,
    /// Seconds left in the active interval (mirrors the focus duration
    /// while idle).
    pub remaining_seconds: u32,
    /// Progress through the active interval, 0-100. Frozen while paused.
    pub progress_percent: u8,
    /// Focus sessions completed to date.
    pub completed_sessions: u32,
}

/// Transient state between an interval expiring and the next one starting.
///
/// At most one exists at a time; Reset discards it unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationContext {
    /// True if a focus interval just completed, false for a break.
    pub focus_just_completed: bool,
    /// Seconds left on the notification's own countdown.
    pub countdown_seconds: u32,
}

/// Accent class for the notification popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationAccent {
    /// A focus interval finished; the break is starting.
    FocusComplete,
    /// A break finished; focus resumes shortly.
    BreakComplete,
}

/// Static content of a notification popup.
///
/// The live countdown number is read from the engine each frame; this
/// carries only what is fixed when the notification opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    /// Popup title.
    pub title: String,
    /// Popup body text.
    pub message: String,
    /// Label shown next to the countdown.
    pub countdown_label: &'static str,
    /// Accent class for popup styling.
    pub accent: NotificationAccent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(TimerState::Ready.to_string(), "READY");
        assert_eq!(TimerState::RunningFocus.to_string(), "FOCUS");
        assert_eq!(TimerState::PausedBreak.to_string(), "PAUSED (BREAK)");
    }

    #[test]
    fn test_state_predicates() {
        assert!(TimerState::RunningFocus.is_running());
        assert!(TimerState::RunningBreak.is_running());
        assert!(!TimerState::Ready.is_running());

        assert!(TimerState::PausedFocus.is_paused());
        assert!(!TimerState::RunningBreak.is_paused());
    }
}
