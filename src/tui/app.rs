//! Application state for the TUI.

use std::io::Write;

use crate::config::{Settings, SettingsStore};
use crate::engine::{
    Effect, EngineSnapshot, Intent, NotificationView, PomodoroEngine,
};

/// Application state: the engine plus local rendering state.
pub struct App {
    /// The timer state machine.
    engine: PomodoroEngine,
    /// Static content of the open notification popup, if any.
    pub notification: Option<NotificationView>,
    /// Status message to display.
    pub status: Option<String>,
}

impl App {
    /// Create a new app instance, loading settings from the store.
    #[must_use]
    pub fn new(store: SettingsStore) -> Self {
        Self {
            engine: PomodoroEngine::new(store),
            notification: None,
            status: Some("Press ? for help".to_string()),
        }
    }

    /// Forward an intent to the engine and apply the resulting effects.
    pub fn dispatch(&mut self, intent: Intent) {
        for effect in self.engine.handle(intent) {
            match effect {
                Effect::PlayAlarm => ring_bell(),
                Effect::OpenNotification(view) => self.notification = Some(view),
                Effect::CloseNotification => self.notification = None,
            }
        }

        match intent {
            Intent::Reset => self.status = Some("Timer reset".to_string()),
            Intent::ToggleTheme(dark) => {
                self.status = Some(if dark { "Dark theme" } else { "Light theme" }.to_string());
            }
            Intent::ToggleSound(enabled) => {
                self.status = Some(if enabled { "Sound on" } else { "Sound off" }.to_string());
            }
            _ => {}
        }
    }

    /// Deliver one second of virtual time to the active tick channels.
    ///
    /// The notification channel ticks first so a countdown that expires in
    /// the same second as the session clock resolves before the session
    /// transition opens its successor.
    pub fn on_second(&mut self) {
        if self.engine.notification_ticking() {
            self.dispatch(Intent::NotificationTick);
        }
        if self.engine.session_ticking() {
            self.dispatch(Intent::SessionTick);
        }
    }

    /// Current display state.
    #[must_use]
    pub const fn snapshot(&self) -> EngineSnapshot {
        self.engine.snapshot()
    }

    /// Current settings (labels, sliders, theme).
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        self.engine.settings()
    }

    /// Live seconds left on the open notification's countdown.
    #[must_use]
    pub fn notification_countdown(&self) -> Option<u32> {
        self.engine.notification().map(|n| n.countdown_seconds)
    }

    /// Clear the transient status message.
    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

/// Ring the terminal bell. How the bell sounds is the terminal's business.
fn ring_bell() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}
