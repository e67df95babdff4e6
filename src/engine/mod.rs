//! The Pomodoro timer state machine.
//!
//! The engine is pure with respect to time: it never reads a clock.
//! Elapsed seconds arrive as discrete [`Intent::SessionTick`] and
//! [`Intent::NotificationTick`] intents, so tests drive it
//! deterministically and the presentation layer owns the real clock.

mod intent;
mod machine;
mod state;

pub use intent::Intent;
pub use machine::{Effect, PomodoroEngine};
pub use state::{
    EngineSnapshot, NotificationAccent, NotificationContext, NotificationView, TimerState,
};
