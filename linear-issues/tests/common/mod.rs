// ABOUTME: Shared fixtures for integration tests: mock API server, scripted selector and prompts
// ABOUTME: Lets command flows run end to end without a terminal

#![allow(dead_code)]

use linear_api::{LinearClient, LinearError, Selector};
use linear_issues::interactive::TextPrompts;
use mockito::ServerGuard;
use secrecy::SecretString;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::VecDeque;

pub fn test_client(server: &ServerGuard) -> LinearClient {
    LinearClient::builder()
        .auth_token(SecretString::new("test-api-key".to_string().into_boxed_str()))
        .endpoint(format!("{}/graphql", server.url()))
        .build()
        .unwrap()
}

pub fn teams_response(nodes: &[(&str, &str)]) -> String {
    let nodes: Vec<Value> = nodes
        .iter()
        .map(|(id, name)| json!({"id": id, "name": name}))
        .collect();
    json!({"data": {"teams": {"nodes": nodes}}}).to_string()
}

pub fn scoped_response(nodes: Vec<Value>) -> String {
    json!({"data": {"team": {"candidates": {"nodes": nodes}}}}).to_string()
}

pub fn named(id: &str, name: &str) -> Value {
    json!({"id": id, "name": name})
}

pub fn state(id: &str, name: &str, state_type: &str) -> Value {
    json!({"id": id, "name": name, "type": state_type})
}

pub fn issue_json(
    id: &str,
    identifier: &str,
    title: &str,
    state: Value,
    project: Option<Value>,
    assignee: Option<Value>,
) -> Value {
    json!({
        "id": id,
        "identifier": identifier,
        "title": title,
        "description": null,
        "state": state,
        "team": {"id": "T1", "name": "Engineering"},
        "project": project,
        "assignee": assignee
    })
}

pub fn issues_response(issues: Vec<Value>) -> String {
    json!({"data": {"issues": {"nodes": issues}}}).to_string()
}

pub fn sample_issues() -> Vec<Value> {
    vec![
        issue_json(
            "issue-1",
            "ENG-1",
            "Test Issue 1",
            state("S-todo", "Todo", "unstarted"),
            Some(named("P1", "Web App")),
            Some(named("U-alice", "Alice")),
        ),
        issue_json(
            "issue-2",
            "ENG-2",
            "Test Issue 2",
            state("S-started", "In Progress", "started"),
            None,
            Some(named("U-bob", "Bob")),
        ),
        issue_json(
            "issue-3",
            "ENG-3",
            "Test Issue 3",
            state("S-done", "Done", "completed"),
            None,
            None,
        ),
    ]
}

pub fn payload_response(operation: &str, success: bool, issue: Option<Value>) -> String {
    json!({"data": {operation: {"success": success, "issue": issue}}}).to_string()
}

#[derive(Debug, Clone)]
pub struct SelectorCall {
    pub label: String,
    pub items: Vec<String>,
    pub default_index: Option<usize>,
}

/// Answers selections from a script; an exhausted script cancels
pub struct ScriptedSelector {
    answers: RefCell<VecDeque<usize>>,
    calls: RefCell<Vec<SelectorCall>>,
}

impl ScriptedSelector {
    pub fn new(answers: &[usize]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().copied().collect()),
            calls: RefCell::new(Vec::new()),
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
    ) -> linear_api::Result<(usize, String)> {
        self.calls.borrow_mut().push(SelectorCall {
            label: label.to_string(),
            items: items.to_vec(),
            default_index,
        });
        let index = self
            .answers
            .borrow_mut()
            .pop_front()
            .ok_or(LinearError::Cancelled)?;
        Ok((index, items[index].clone()))
    }
}

/// Fixed answers for the text prompts, recording the defaults offered
pub struct ScriptedPrompts {
    pub title: String,
    pub description: Option<String>,
    pub offered: RefCell<Vec<Option<String>>>,
}

impl ScriptedPrompts {
    pub fn new(title: &str, description: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            description: description.map(str::to_string),
            offered: RefCell::new(Vec::new()),
        }
    }
}

impl TextPrompts for ScriptedPrompts {
    fn title(&self, current: Option<&str>) -> linear_api::Result<String> {
        self.offered.borrow_mut().push(current.map(str::to_string));
        Ok(self.title.clone())
    }

    fn description(&self, current: Option<&str>) -> linear_api::Result<Option<String>> {
        self.offered.borrow_mut().push(current.map(str::to_string));
        Ok(self.description.clone())
    }
}
