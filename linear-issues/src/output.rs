// ABOUTME: This module handles output formatting for the Linear issues CLI
// ABOUTME: It provides table and JSON formatters plus a short detail view of one issue

use anyhow::Result;
use linear_api::Issue;
use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::constants::ui::{NO_PROJECT, TITLE_MAX_LEN, UNASSIGNED};
use crate::types::StateType;

pub trait OutputFormat {
    fn format_issues(&self, issues: &[Issue]) -> Result<String>;
}

pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn truncate_title(title: &str, max_len: usize) -> String {
        if title.chars().count() <= max_len {
            title.to_string()
        } else {
            let head: String = title.chars().take(max_len - 3).collect();
            format!("{head}...")
        }
    }

    fn format_state(&self, issue: &Issue) -> String {
        let name = issue.state.name.as_str();
        if !self.use_color {
            return name.to_string();
        }

        match issue.state.state_type.parse::<StateType>() {
            Ok(StateType::Backlog | StateType::Unstarted | StateType::Triage) => {
                name.dimmed().to_string()
            }
            Ok(StateType::Started) => name.yellow().to_string(),
            Ok(StateType::Completed) => name.green().to_string(),
            Ok(StateType::Canceled) => name.red().to_string(),
            Err(_) => name.to_string(),
        }
    }

    fn format_optional(&self, value: Option<&str>, placeholder: &str) -> String {
        match value {
            Some(text) => text.to_string(),
            None if self.use_color => placeholder.dimmed().to_string(),
            None => placeholder.to_string(),
        }
    }
}

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormat for JsonFormatter {
    fn format_issues(&self, issues: &[Issue]) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(issues)?)
        } else {
            Ok(serde_json::to_string(issues)?)
        }
    }
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Issue")]
    issue: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Assignee")]
    assignee: String,
    #[tabled(rename = "Project")]
    project: String,
}

impl OutputFormat for TableFormatter {
    fn format_issues(&self, issues: &[Issue]) -> Result<String> {
        let rows: Vec<TableRow> = issues
            .iter()
            .map(|issue| TableRow {
                issue: issue.identifier.clone(),
                title: Self::truncate_title(&issue.title, TITLE_MAX_LEN),
                state: self.format_state(issue),
                assignee: self.format_optional(issue.assignee_name(), UNASSIGNED),
                project: self.format_optional(issue.project_name(), NO_PROJECT),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::psql());
        Ok(table.to_string())
    }
}

/// Multi-line summary shown after a create or update
pub fn format_issue_detail(issue: &Issue, use_color: bool) -> String {
    let identifier = if use_color {
        issue.identifier.bold().to_string()
    } else {
        issue.identifier.clone()
    };

    let mut lines = vec![
        format!("{identifier} {}", issue.title),
        format!("  ID: {}", issue.id),
        format!("  Team: {}", issue.team.name),
        format!("  State: {} ({})", issue.state.name, issue.state.state_type),
        format!("  Assignee: {}", issue.assignee_name().unwrap_or(UNASSIGNED)),
        format!("  Project: {}", issue.project_name().unwrap_or(NO_PROJECT)),
    ];
    if let Some(description) = issue.description.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(format!("  Description: {description}"));
    }
    lines.join("\n")
}
