// ABOUTME: Centralized constants for the Linear issues CLI
// ABOUTME: Contains config locations, environment variable names, UI labels and state types

/// Timing for terminal feedback
pub mod timeouts {
    /// Spinner tick interval for smooth animation
    pub const PROGRESS_BAR_TICK_MS: u64 = 80;
}

/// Configuration file locations, relative to the home directory
pub mod paths {
    pub const CONFIG_DIR: &str = ".config/linear_cli";
    pub const CONFIG_FILE: &str = "config.toml";
    pub const ENV_FILE: &str = ".env";
}

/// Environment variables read at startup
pub mod env {
    pub const API_KEY: &str = "LINEAR_API_KEY";
    /// Older name, still honored when `LINEAR_API_KEY` is unset
    pub const LEGACY_API_KEY: &str = "API_KEY";
    pub const API_URL: &str = "LINEAR_API_URL";

    /// Presence of any of these disables prompts
    pub const CI_MARKERS: &[&str] = &["CI", "GITHUB_ACTIONS", "JENKINS_URL", "BUILDKITE"];
}

/// UI and formatting constants
pub mod ui {
    /// Longest title shown in the issue table before truncation
    pub const TITLE_MAX_LEN: usize = 40;

    /// Rows visible at once in the selection list
    pub const SELECTOR_WINDOW: usize = 10;

    /// Columns assumed when the terminal size is unknown
    pub const FALLBACK_TERMINAL_WIDTH: usize = 80;

    pub const NO_PROJECT: &str = "No Project";
    pub const UNASSIGNED: &str = "Unassigned";
    pub const SELECT_ISSUE: &str = "Select Issue";
}

/// Workflow state categories as reported by the API
pub mod state_types {
    pub const BACKLOG: &str = "backlog";
    pub const UNSTARTED: &str = "unstarted";
    pub const STARTED: &str = "started";
    pub const COMPLETED: &str = "completed";
    pub const CANCELED: &str = "canceled";
    pub const TRIAGE: &str = "triage";
}
