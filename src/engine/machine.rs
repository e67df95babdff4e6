//! The Pomodoro engine: intent handling and session transitions.

use crate::config::{Settings, SettingsStore};
use crate::engine::intent::Intent;
use crate::engine::state::{
    EngineSnapshot, NotificationAccent, NotificationContext, NotificationView, TimerState,
};

/// Seconds on the fixed countdown after a break expires, before focus
/// resumes automatically. Deliberately not scaled by the break duration.
const BREAK_END_COUNTDOWN_SECS: u32 = 5;

/// A side effect the presentation layer must perform.
///
/// The engine decides *whether*; the caller decides *how*.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Sound the alarm. Only emitted when sound is enabled.
    PlayAlarm,
    /// Show the interval-complete popup.
    OpenNotification(NotificationView),
    /// Dismiss the popup.
    CloseNotification,
}

/// The Pomodoro timer state machine.
///
/// Owns the settings record for the program's lifetime and persists it
/// after every mutating intent. All time arrives as tick intents; the
/// engine never blocks and never reads a clock.
pub struct PomodoroEngine {
    state: TimerState,
    remaining_seconds: u32,
    progress_percent: u8,
    notification: Option<NotificationContext>,
    settings: Settings,
    store: SettingsStore,
}

impl PomodoroEngine {
    /// Create an engine, loading settings from the store.
    #[must_use]
    pub fn new(store: SettingsStore) -> Self {
        let settings = store.load();
        Self {
            state: TimerState::Ready,
            remaining_seconds: settings.focus_seconds(),
            progress_percent: 0,
            notification: None,
            settings,
            store,
        }
    }

    /// Process one intent to completion.
    ///
    /// Returns the side effects the caller must perform, in order.
    pub fn handle(&mut self, intent: Intent) -> Vec<Effect> {
        let mut effects = Vec::new();

        match intent {
            Intent::Start => self.on_start(),
            Intent::Pause => self.on_pause(),
            Intent::Reset => self.on_reset(&mut effects),
            Intent::SetFocusDuration(minutes) => self.on_set_focus(minutes),
            Intent::SetBreakDuration(minutes) => self.on_set_break(minutes),
            Intent::ToggleTheme(dark) => {
                self.settings.dark_mode = dark;
                self.persist();
            }
            Intent::ToggleSound(enabled) => {
                self.settings.sound_enabled = enabled;
                self.persist();
            }
            Intent::SessionTick => self.on_session_tick(&mut effects),
            Intent::NotificationTick => self.on_notification_tick(&mut effects),
            Intent::Shutdown => self.persist(),
        }

        self.refresh_progress();
        effects
    }

    /// Current display state.
    #[must_use]
    pub const fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            state: self.state,
            remaining_seconds: self.remaining_seconds,
            progress_percent: self.progress_percent,
            completed_sessions: self.settings.completed_sessions,
        }
    }

    /// Current settings (for labels, sliders, and theme).
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The live notification, if one is open.
    #[must_use]
    pub const fn notification(&self) -> Option<&NotificationContext> {
        self.notification.as_ref()
    }

    /// Whether the session clock should deliver ticks.
    ///
    /// False while idle or paused, and while a break-end countdown is
    /// gating the pending return to focus.
    #[must_use]
    pub fn session_ticking(&self) -> bool {
        match self.state {
            TimerState::RunningFocus => true,
            TimerState::RunningBreak => self
                .notification
                .as_ref()
                .map_or(true, |n| n.focus_just_completed),
            _ => false,
        }
    }

    /// Whether the notification countdown should deliver ticks.
    #[must_use]
    pub const fn notification_ticking(&self) -> bool {
        self.notification.is_some()
    }

    fn on_start(&mut self) {
        match self.state {
            TimerState::Ready => {
                self.state = TimerState::RunningFocus;
                self.remaining_seconds = self.settings.focus_seconds();
            }
            TimerState::PausedFocus => self.state = TimerState::RunningFocus,
            TimerState::PausedBreak => self.state = TimerState::RunningBreak,
            // No-op while an interval is already running.
            TimerState::RunningFocus | TimerState::RunningBreak => {}
        }
    }

    fn on_pause(&mut self) {
        match self.state {
            TimerState::RunningFocus => self.state = TimerState::PausedFocus,
            TimerState::RunningBreak => self.state = TimerState::PausedBreak,
            // No-op unless an interval is running.
            _ => {}
        }
    }

    fn on_reset(&mut self, effects: &mut Vec<Effect>) {
        if self.notification.take().is_some() {
            effects.push(Effect::CloseNotification);
        }
        self.state = TimerState::Ready;
        self.remaining_seconds = self.settings.focus_seconds();
    }

    fn on_set_focus(&mut self, minutes: u32) {
        self.settings.focus_minutes = Settings::clamp_focus(minutes);
        // Only the idle display picks up the new duration; an in-progress
        // interval keeps its remaining time.
        if self.state == TimerState::Ready {
            self.remaining_seconds = self.settings.focus_seconds();
        }
        self.persist();
    }

    fn on_set_break(&mut self, minutes: u32) {
        self.settings.break_minutes = Settings::clamp_break(minutes);
        self.persist();
    }

    fn on_session_tick(&mut self, effects: &mut Vec<Effect>) {
        // Late or duplicate ticks from a cancelled clock are ignored.
        if !self.session_ticking() {
            return;
        }

        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }

        if self.remaining_seconds == 0 {
            self.complete_interval(effects);
        }
    }

    fn complete_interval(&mut self, effects: &mut Vec<Effect>) {
        let focus_completed = self.state == TimerState::RunningFocus;

        if focus_completed {
            self.settings.completed_sessions += 1;
            self.persist();
        }

        if self.settings.sound_enabled {
            effects.push(Effect::PlayAlarm);
        }

        let countdown_seconds = if focus_completed {
            self.settings.break_seconds()
        } else {
            BREAK_END_COUNTDOWN_SECS
        };

        self.notification = Some(NotificationContext {
            focus_just_completed: focus_completed,
            countdown_seconds,
        });
        effects.push(Effect::OpenNotification(self.notification_view(
            focus_completed,
        )));

        if focus_completed {
            self.state = TimerState::RunningBreak;
            self.remaining_seconds = self.settings.break_seconds();
        }
        // Break completed: stay in RunningBreak with the session clock
        // halted; the countdown expiry restarts focus.
    }

    fn on_notification_tick(&mut self, effects: &mut Vec<Effect>) {
        let Some(notification) = self.notification.as_mut() else {
            return;
        };

        if notification.countdown_seconds > 0 {
            notification.countdown_seconds -= 1;
        }

        if notification.countdown_seconds == 0 {
            let focus_completed = notification.focus_just_completed;
            self.notification = None;
            effects.push(Effect::CloseNotification);

            if !focus_completed {
                // Break-end countdown expired: begin a fresh focus interval.
                self.state = TimerState::RunningFocus;
                self.remaining_seconds = self.settings.focus_seconds();
            }
        }
    }

    fn notification_view(&self, focus_completed: bool) -> NotificationView {
        let focus = self.settings.focus_minutes;
        let brk = self.settings.break_minutes;

        if focus_completed {
            NotificationView {
                title: "Focus Complete".to_string(),
                message: format!(
                    "You finished a {focus}-minute focus session.\n\
                     Stretch, hydrate, and rest for {brk} minutes.",
                ),
                countdown_label: "Break time running:",
                accent: NotificationAccent::FocusComplete,
            }
        } else {
            NotificationView {
                title: "Break Complete".to_string(),
                message: format!(
                    "Your {brk}-minute break is over.\n\
                     Back to focus for {focus} minutes.",
                ),
                countdown_label: "Focus resumes in:",
                accent: NotificationAccent::BreakComplete,
            }
        }
    }

    fn refresh_progress(&mut self) {
        self.progress_percent = match self.state {
            TimerState::Ready => 0,
            TimerState::RunningFocus => {
                interval_progress(self.remaining_seconds, self.settings.focus_seconds())
            }
            TimerState::RunningBreak => {
                interval_progress(self.remaining_seconds, self.settings.break_seconds())
            }
            // Frozen at the last computed value while paused.
            TimerState::PausedFocus | TimerState::PausedBreak => self.progress_percent,
        };
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.settings) {
            log::warn!("settings not saved: {e}");
        }
    }
}

/// Percent elapsed through an interval.
///
/// Guards the zero total a corrupted settings record can produce, and
/// saturates when a mid-run duration change leaves `remaining > total`.
#[allow(clippy::cast_possible_truncation)]
fn interval_progress(remaining: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let elapsed = 100u32.saturating_sub(remaining.saturating_mul(100) / total);
    elapsed.min(100) as u8
}
