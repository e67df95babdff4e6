//! Subcommand implementations.

use clap::CommandFactory;
use clap_complete::Shell;
use colored::Colorize;
use serde_json::json;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::SettingsStore;
use crate::error::TomatuiError;

/// Show the persisted settings and session statistics.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn stats(store: &SettingsStore, format: OutputFormat) -> Result<String, TomatuiError> {
    let settings = store.load();

    match format {
        OutputFormat::Json => {
            let output = json!({
                "focus_minutes": settings.focus_minutes,
                "break_minutes": settings.break_minutes,
                "dark_mode": settings.dark_mode,
                "sound_enabled": settings.sound_enabled,
                "completed_sessions": settings.completed_sessions,
            });
            Ok(serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push("🍅 tomatui".bold().to_string());
            output.push("─".repeat(30));
            output.push(format!(
                "Sessions completed: {}",
                settings.completed_sessions.to_string().green().bold()
            ));
            output.push(format!("Focus duration:     {} min", settings.focus_minutes));
            output.push(format!("Break duration:     {} min", settings.break_minutes));
            output.push(format!(
                "Theme:              {}",
                if settings.dark_mode { "dark" } else { "light" }
            ));
            output.push(format!(
                "Sound:              {}",
                if settings.sound_enabled { "on" } else { "off" }
            ));

            Ok(output.join("\n"))
        }
    }
}

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, TomatuiError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "tomatui", &mut buf);
    String::from_utf8(buf).map_err(|e| TomatuiError::Config(format!("UTF-8 error: {e}")))
}
