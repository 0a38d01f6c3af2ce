// ABOUTME: Centralized CLI output utilities for consistent user-facing messages
// ABOUTME: Formats error, info, success and help lines and owns the progress spinner

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::time::Duration;

use crate::constants::timeouts::PROGRESS_BAR_TICK_MS;

/// Centralized CLI output utilities for consistent formatting
pub struct CliOutput {
    use_color: bool,
    show_progress: bool,
}

impl CliOutput {
    /// Create CLI output utility with explicit color setting
    pub fn with_color(use_color: bool) -> Self {
        Self {
            use_color,
            show_progress: std::io::stderr().is_terminal(),
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{}", self.line("error:", message, Tone::Error));
    }

    pub fn info(&self, message: &str) {
        eprintln!("{}", self.line("info:", message, Tone::Info));
    }

    pub fn success(&self, message: &str) {
        eprintln!("{}", self.line("success:", message, Tone::Success));
    }

    /// Actionable hint printed after an error
    pub fn help(&self, message: &str) {
        eprintln!("{}", self.line("help:", message, Tone::Help));
    }

    /// Spinner on stderr while a request is in flight; hidden off-terminal
    pub fn spinner(&self, message: &str) -> ProgressBar {
        log::info!("{message}");
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(PROGRESS_BAR_TICK_MS));
        spinner
    }

    fn line(&self, prefix: &str, message: &str, tone: Tone) -> String {
        if !self.use_color {
            return format!("{prefix} {message}");
        }
        let prefix = match tone {
            Tone::Error => prefix.red().bold().to_string(),
            Tone::Info => prefix.blue().bold().to_string(),
            Tone::Success => prefix.green().bold().to_string(),
            Tone::Help => prefix.cyan().bold().to_string(),
        };
        format!("{prefix} {message}")
    }
}

#[derive(Clone, Copy)]
enum Tone {
    Error,
    Info,
    Success,
    Help,
}
