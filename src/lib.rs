//! tomatui - a Pomodoro timer for the terminal
//!
//! This crate implements the Pomodoro technique as a small TUI application:
//! alternating focus and break intervals driven by a pure, intent-based
//! state machine, with persisted settings and a completed-session counter.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use config::{Settings, SettingsStore};
pub use engine::{Effect, EngineSnapshot, Intent, PomodoroEngine, TimerState};
pub use error::TomatuiError;
