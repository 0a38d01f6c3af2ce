// ABOUTME: Error taxonomy for the Linear API client, resolver and issue operations
// ABOUTME: Separates transport, API, decoding, lookup and application-level failures

use crate::resolver::EntityKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinearError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Request failed with HTTP status {status}: {body}")]
    Transport { status: u16, body: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GraphQL errors in response: {errors}")]
    Api { errors: String },

    #[error("Unexpected response shape: {message} - response body: {body}")]
    Decode { message: String, body: String },

    #[error("{}", not_found_message(.kind, .name, .scope.as_deref()))]
    NotFound {
        kind: EntityKind,
        name: String,
        scope: Option<String>,
    },

    #[error("Multiple {}s match '{name}': {}", .kind, .candidates.join(", "))]
    Ambiguous {
        kind: EntityKind,
        name: String,
        candidates: Vec<String>,
    },

    #[error("Cancelled")]
    Cancelled,

    #[error("{operation} was rejected: API reported success: false")]
    MutationFailed { operation: &'static str },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

fn not_found_message(kind: &EntityKind, name: &str, scope: Option<&str>) -> String {
    // An empty name means a browse came back with nothing to pick from
    let mut message = if name.is_empty() {
        format!("No {kind}s found")
    } else {
        format!("{} '{}' not found", kind.title(), name)
    };
    if let Some(team_id) = scope {
        message.push_str(&format!(" in team (ID: {team_id})"));
    }
    message
}

impl LinearError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            LinearError::Configuration(_) => Some(
                "Set LINEAR_API_KEY (or API_KEY) in your environment or in ~/.config/linear_cli/.env\n\
                 Get your API key from: https://linear.app/settings/api",
            ),
            LinearError::Transport { status: 401, .. } => {
                Some("The API key was rejected. Check LINEAR_API_KEY or ~/.config/linear_cli/.env")
            }
            LinearError::Transport { status: 429, .. } => {
                Some("Wait a moment before making another request")
            }
            LinearError::Network { .. } => Some("Check your internet connection and try again"),
            LinearError::Decode { .. } => {
                Some("The API returned a shape this client does not understand")
            }
            LinearError::NotFound { .. } => Some("Names are matched exactly, including case"),
            LinearError::Ambiguous { .. } => {
                Some("Run the command in an interactive terminal to choose between the matches")
            }
            _ => None,
        }
    }

    /// Cancellation is a user choice, not a failure
    pub fn is_cancelled(&self) -> bool {
        matches!(self, LinearError::Cancelled)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        LinearError::InvalidInput {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for LinearError {
    fn from(err: reqwest::Error) -> Self {
        LinearError::Network {
            message: err.to_string(),
            source: err,
        }
    }
}
