use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "tomatui")]
#[command(about = "A Pomodoro timer for the terminal")]
#[command(long_about = "tomatui - A Pomodoro timer for the terminal

Alternating focus and break intervals with adjustable durations, a
persisted completed-session counter, an audible alarm, and light/dark
themes. Run without a subcommand to open the timer.

QUICK START:
  tomatui                   Open the timer
  tomatui stats             Show the completed-session counter
  tomatui stats -o json     Machine-readable statistics

KEYS (inside the timer):
  space  start / pause          r      reset
  ←/→    focus duration         ↓/↑    break duration
  d      light / dark theme     m      sound on / off
  q      quit (settings are saved on exit)")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Path to the settings record (default: ~/.tomatui/settings)
    #[arg(long, env = "TOMATUI_SETTINGS", global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the persisted settings and session statistics
    ///
    /// Reads the settings record without opening the timer. Useful for
    /// status bars and scripts.
    ///
    /// # Examples
    ///
    ///   tomatui stats
    ///   tomatui stats -o json | jq .completed_sessions
    #[command(alias = "st")]
    Stats,

    /// Generate shell completions
    ///
    /// Prints a completion script for the given shell to stdout.
    ///
    /// # Examples
    ///
    ///   tomatui completions bash > /usr/local/etc/bash_completion.d/tomatui
    ///   source <(tomatui completions zsh)
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
