// ABOUTME: Test helper utilities for mocking Linear API responses and server
// ABOUTME: Provides mockito-based helpers and a scripted selector for unit tests

use mockito::{Server, ServerGuard};
use secrecy::SecretString;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::LinearError;
use crate::selector::Selector;
use crate::{LinearClient, Result};

pub async fn mock_linear_server() -> ServerGuard {
    Server::new_async().await
}

/// Client pointed at the mock server's `/graphql` path
pub fn test_client(server: &ServerGuard) -> LinearClient {
    LinearClient::builder()
        .auth_token(SecretString::new("test-api-key".to_string().into_boxed_str()))
        .endpoint(format!("{}/graphql", server.url()))
        .build()
        .unwrap()
}

pub fn node(id: &str, name: &str) -> Value {
    json!({"id": id, "name": name})
}

pub fn state_node(id: &str, name: &str, state_type: &str) -> Value {
    json!({"id": id, "name": name, "type": state_type})
}

/// Response of a team-scoped lookup (`team { candidates { nodes } }`)
pub fn mock_scoped_candidates_response(nodes: Vec<Value>) -> Value {
    json!({
        "data": {
            "team": {
                "candidates": {
                    "nodes": nodes
                }
            }
        }
    })
}

pub fn mock_teams_response() -> Value {
    json!({
        "data": {
            "teams": {
                "nodes": [
                    {
                        "id": "team-eng-uuid",
                        "name": "Engineering"
                    },
                    {
                        "id": "team-design-uuid",
                        "name": "Design"
                    },
                    {
                        "id": "team-qa-uuid",
                        "name": "Quality Assurance"
                    }
                ]
            }
        }
    })
}

fn issue(
    id: &str,
    identifier: &str,
    title: &str,
    state: (&str, &str),
    assignee: Option<&str>,
    project: Option<&str>,
) -> Value {
    json!({
        "id": id,
        "identifier": identifier,
        "title": title,
        "description": null,
        "state": {
            "id": format!("state-{}", state.1),
            "name": state.0,
            "type": state.1
        },
        "team": {
            "id": "team-eng-uuid",
            "name": "Engineering"
        },
        "project": project.map(|name| json!({"id": "project-web-uuid", "name": name})),
        "assignee": assignee.map(|name| json!({"id": format!("user-{}", name.to_lowercase()), "name": name}))
    })
}

pub fn mock_issues_response() -> Value {
    json!({
        "data": {
            "issues": {
                "nodes": [
                    issue("issue-1", "ENG-1", "Test Issue 1", ("Todo", "unstarted"), Some("Alice"), Some("Web App")),
                    issue("issue-2", "ENG-2", "Test Issue 2", ("In Progress", "started"), Some("Bob"), None),
                    issue("issue-3", "ENG-3", "Test Issue 3", ("Done", "completed"), None, None)
                ]
            }
        }
    })
}

pub fn mock_empty_issues_response() -> Value {
    json!({
        "data": {
            "issues": {
                "nodes": []
            }
        }
    })
}

pub fn mock_error_response() -> Value {
    json!({
        "errors": [
            {
                "message": "Authentication required",
                "extensions": {
                    "code": "UNAUTHENTICATED"
                }
            }
        ]
    })
}

pub fn mock_detailed_issue_response() -> Value {
    json!({
        "data": {
            "issue": {
                "id": "issue-detailed-123",
                "identifier": "ENG-123",
                "title": "Fix login race condition",
                "description": "Users are experiencing race conditions when logging in simultaneously from multiple devices.",
                "state": {
                    "id": "state-in-progress",
                    "name": "In Progress",
                    "type": "started"
                },
                "assignee": {
                    "id": "user-john",
                    "name": "John Doe"
                },
                "team": {
                    "id": "team-eng-uuid",
                    "name": "Engineering"
                },
                "project": {
                    "id": "project-web-uuid",
                    "name": "Web App"
                }
            }
        }
    })
}

pub fn mock_minimal_issue_response() -> Value {
    json!({
        "data": {
            "issue": {
                "id": "issue-minimal-456",
                "identifier": "ENG-456",
                "title": "Simple issue",
                "description": null,
                "state": {
                    "id": "state-todo",
                    "name": "Todo",
                    "type": "unstarted"
                },
                "assignee": null,
                "team": {
                    "id": "team-eng-uuid",
                    "name": "Engineering"
                },
                "project": null
            }
        }
    })
}

pub fn mock_issue_not_found_response() -> Value {
    json!({
        "data": {
            "issue": null
        }
    })
}

pub fn mock_create_issue_response() -> Value {
    json!({
        "data": {
            "issueCreate": {
                "success": true,
                "issue": issue("new-issue-id", "ENG-999", "Test New Issue", ("Todo", "unstarted"), Some("Test User"), None)
            }
        }
    })
}

pub fn mock_create_issue_failure_response() -> Value {
    json!({
        "data": {
            "issueCreate": {
                "success": false,
                "issue": null
            }
        }
    })
}

pub fn mock_update_issue_response() -> Value {
    json!({
        "data": {
            "issueUpdate": {
                "success": true,
                "issue": issue("issue-1", "ENG-1", "Renamed", ("In Progress", "started"), None, None)
            }
        }
    })
}

pub fn mock_update_issue_failure_response() -> Value {
    json!({
        "data": {
            "issueUpdate": {
                "success": false,
                "issue": null
            }
        }
    })
}

/// A recorded call to [`ScriptedSelector`]
#[derive(Debug, Clone)]
pub struct SelectorCall {
    pub label: String,
    pub items: Vec<String>,
    pub default_index: Option<usize>,
}

/// Selector that answers with pre-scripted indices and records what it was shown
pub struct ScriptedSelector {
    answers: RefCell<VecDeque<usize>>,
    cancel: bool,
    calls: RefCell<Vec<SelectorCall>>,
}

impl ScriptedSelector {
    pub fn new(answers: Vec<usize>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            cancel: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn cancelling() -> Self {
        Self {
            cancel: true,
            ..Self::new(vec![])
        }
    }

    pub fn calls(&self) -> Vec<SelectorCall> {
        self.calls.borrow().clone()
    }
}

impl Selector for ScriptedSelector {
    fn select(
        &self,
        label: &str,
        items: &[String],
        default_index: Option<usize>,
    ) -> Result<(usize, String)> {
        self.calls.borrow_mut().push(SelectorCall {
            label: label.to_string(),
            items: items.to_vec(),
            default_index,
        });

        if self.cancel {
            return Err(LinearError::Cancelled);
        }

        let index = self
            .answers
            .borrow_mut()
            .pop_front()
            .expect("selector called more often than scripted");
        Ok((index, items[index].clone()))
    }
}
