// ABOUTME: Type definitions and enums for the Linear issues CLI
// ABOUTME: Provides the workflow state category used for filtering and coloring

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

use crate::constants::state_types;

/// Coarse lifecycle category of a workflow state
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StateType {
    Backlog,
    Unstarted,
    Started,
    Completed,
    Canceled,
    Triage,
}

impl StateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateType::Backlog => state_types::BACKLOG,
            StateType::Unstarted => state_types::UNSTARTED,
            StateType::Started => state_types::STARTED,
            StateType::Completed => state_types::COMPLETED,
            StateType::Canceled => state_types::CANCELED,
            StateType::Triage => state_types::TRIAGE,
        }
    }

    /// Completed and canceled issues are finished and not offered for editing
    pub fn is_closed(&self) -> bool {
        matches!(self, StateType::Completed | StateType::Canceled)
    }
}

impl FromStr for StateType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            state_types::BACKLOG => Ok(StateType::Backlog),
            state_types::UNSTARTED => Ok(StateType::Unstarted),
            state_types::STARTED => Ok(StateType::Started),
            state_types::COMPLETED => Ok(StateType::Completed),
            state_types::CANCELED => Ok(StateType::Canceled),
            state_types::TRIAGE => Ok(StateType::Triage),
            other => Err(format!("Unknown state type '{other}'")),
        }
    }
}

impl fmt::Display for StateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// True for state type strings that mark an issue as finished
pub fn is_closed_state(state_type: &str) -> bool {
    state_type
        .parse::<StateType>()
        .map(|t| t.is_closed())
        .unwrap_or(false)
}
