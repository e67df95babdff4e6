//! Persisted settings and statistics for tomatui.
//!
//! The record is five whitespace-separated scalar fields in fixed order:
//! `focus_minutes break_minutes dark_mode(0/1) sound_enabled(0/1)
//! completed_sessions`. A missing or malformed record falls back to
//! defaults; persistence failures are logged, never surfaced, so losing
//! the file can never take the timer down with it.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::TomatuiError;

/// User-adjustable settings plus the running completed-session counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Focus interval duration in minutes (15-60).
    pub focus_minutes: u32,
    /// Break interval duration in minutes (5-30).
    pub break_minutes: u32,
    /// Dark theme enabled.
    pub dark_mode: bool,
    /// Alarm sound enabled.
    pub sound_enabled: bool,
    /// Number of focus sessions completed to date.
    pub completed_sessions: u32,
}

impl Settings {
    /// Valid range for the focus duration slider, in minutes.
    pub const FOCUS_RANGE: RangeInclusive<u32> = 15..=60;
    /// Valid range for the break duration slider, in minutes.
    pub const BREAK_RANGE: RangeInclusive<u32> = 5..=30;

    /// Clamp a focus duration to its valid range.
    #[must_use]
    pub fn clamp_focus(minutes: u32) -> u32 {
        minutes.clamp(*Self::FOCUS_RANGE.start(), *Self::FOCUS_RANGE.end())
    }

    /// Clamp a break duration to its valid range.
    #[must_use]
    pub fn clamp_break(minutes: u32) -> u32 {
        minutes.clamp(*Self::BREAK_RANGE.start(), *Self::BREAK_RANGE.end())
    }

    /// Focus interval length in seconds.
    #[must_use]
    pub const fn focus_seconds(&self) -> u32 {
        self.focus_minutes.saturating_mul(60)
    }

    /// Break interval length in seconds.
    #[must_use]
    pub const fn break_seconds(&self) -> u32 {
        self.break_minutes.saturating_mul(60)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            break_minutes: 5,
            dark_mode: false,
            sound_enabled: true,
            completed_sessions: 0,
        }
    }
}

/// Loads and saves the settings record.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store at the default path, ensuring the data directory
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined or the
    /// data directory cannot be created.
    pub fn new() -> Result<Self, TomatuiError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        Ok(Self {
            path: paths.settings_file,
        })
    }

    /// Create a store at a specific path (CLI override, tests).
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// The path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings record.
    ///
    /// A missing file yields defaults silently. A file that exists but
    /// cannot be read or parsed yields defaults with a warning; the timer
    /// must keep working without its history.
    #[must_use]
    pub fn load(&self) -> Settings {
        if !self.path.exists() {
            return Settings::default();
        }

        match self.read() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("falling back to default settings: {e}");
                Settings::default()
            }
        }
    }

    fn read(&self) -> Result<Settings, TomatuiError> {
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| TomatuiError::SettingsRead(format!("{}: {e}", self.path.display())))?;
        parse_record(&contents)
    }

    /// Save the settings record.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written. Callers inside the
    /// engine log this and continue; it never propagates into transitions.
    pub fn save(&self, settings: &Settings) -> Result<(), TomatuiError> {
        let record = format!(
            "{}\n{}\n{}\n{}\n{}\n",
            settings.focus_minutes,
            settings.break_minutes,
            u8::from(settings.dark_mode),
            u8::from(settings.sound_enabled),
            settings.completed_sessions,
        );

        std::fs::write(&self.path, record)
            .map_err(|e| TomatuiError::SettingsWrite(format!("{}: {e}", self.path.display())))
    }
}

/// Parse the five-field record.
///
/// Tolerates any mix of spaces and newlines between fields. Wrong field
/// count or a non-numeric token makes the whole record malformed; numeric
/// values outside the slider ranges are kept as-is (the next user-driven
/// change clamps them).
fn parse_record(contents: &str) -> Result<Settings, TomatuiError> {
    let tokens: Vec<&str> = contents.split_whitespace().collect();

    if tokens.len() != 5 {
        return Err(TomatuiError::SettingsParse(format!(
            "expected 5 fields, found {}",
            tokens.len()
        )));
    }

    let field = |i: usize| -> Result<u32, TomatuiError> {
        tokens[i]
            .parse::<u32>()
            .map_err(|_| TomatuiError::SettingsParse(format!("non-numeric field: {:?}", tokens[i])))
    };

    Ok(Settings {
        focus_minutes: field(0)?,
        break_minutes: field(1)?,
        dark_mode: field(2)? != 0,
        sound_enabled: field(3)? != 0,
        completed_sessions: field(4)?,
    })
}
