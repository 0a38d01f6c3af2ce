// ABOUTME: Interactive prompts for collecting issue text fields
// ABOUTME: Decides whether prompting is possible and reads title and description with dialoguer

use dialoguer::Input;
use linear_api::{LinearError, Result as ApiResult};
use std::io::{self, IsTerminal};

use crate::constants::env::CI_MARKERS;

/// Free-text fields gathered from the user
pub trait TextPrompts {
    /// Required title; `current` is offered as the default
    fn title(&self, current: Option<&str>) -> ApiResult<String>;

    /// Optional description; blank input yields `None`
    fn description(&self, current: Option<&str>) -> ApiResult<Option<String>>;
}

pub struct InteractivePrompter {
    is_tty: bool,
    no_input: bool,
}

impl InteractivePrompter {
    pub fn new(no_input: bool) -> Self {
        Self {
            is_tty: io::stdin().is_terminal(),
            no_input,
        }
    }

    /// Check if interactive prompts should be used
    pub fn should_prompt(&self) -> bool {
        self.is_tty && !self.no_input && !Self::is_in_ci()
    }

    /// Check if running in CI environment
    pub fn is_in_ci() -> bool {
        CI_MARKERS.iter().any(|name| std::env::var_os(name).is_some())
    }

    /// Override TTY detection
    pub fn with_tty_override(mut self, is_tty: bool) -> Self {
        self.is_tty = is_tty;
        self
    }
}

impl TextPrompts for InteractivePrompter {
    fn title(&self, current: Option<&str>) -> ApiResult<String> {
        let mut input = Input::<String>::new().with_prompt("Issue Title");
        if let Some(current) = current {
            input = input.default(current.to_string());
        }

        let title = input
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Title cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(|e| prompt_error("title", e))?;

        Ok(title.trim().to_string())
    }

    fn description(&self, current: Option<&str>) -> ApiResult<Option<String>> {
        let mut input = Input::<String>::new()
            .with_prompt("Issue Description (optional)")
            .allow_empty(true);
        if let Some(current) = current.filter(|c| !c.trim().is_empty()) {
            input = input.default(current.to_string());
        }

        let description = input
            .interact_text()
            .map_err(|e| prompt_error("description", e))?;

        Ok(blank_to_none(&description))
    }
}

fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// An interrupted read is the user backing out, anything else is a failure
fn prompt_error(field: &str, error: dialoguer::Error) -> LinearError {
    match error {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => LinearError::Cancelled,
        other => LinearError::invalid_input(format!("Failed to read {field}: {other}")),
    }
}
