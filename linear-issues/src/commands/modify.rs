// ABOUTME: Handler for `issues modify`
// ABOUTME: Walks team, issue and field selection with current values as defaults, then updates

use linear_api::{EntityKind, Issue, IssueQuery, IssueUpdate, LinearError, Relation};

use super::{CommandContext, choose_optional, choose_required};
use crate::cli::ModifyArgs;
use crate::constants::ui::{NO_PROJECT, SELECT_ISSUE, UNASSIGNED};
use crate::output::format_issue_detail;
use crate::types::is_closed_state;

/// Returns `None` when the team has no issue left to edit
pub async fn run(ctx: &CommandContext<'_>, args: &ModifyArgs) -> linear_api::Result<Option<Issue>> {
    let interaction = ctx.require_interaction("issues modify")?;
    let resolver = ctx.resolver();

    let team = choose_required(&resolver, EntityKind::Team, None, None).await?;

    let query = IssueQuery {
        team_id: Some(team.id.clone()),
        project_id: None,
        state_type: args.state_type.map(|t| t.as_str().to_string()),
        limit: args.limit,
    };
    let spinner = ctx.output.spinner("Fetching issues...");
    let issues = ctx.client.list_issues(&query).await;
    spinner.finish_and_clear();

    let open: Vec<Issue> = issues?
        .into_iter()
        .filter(|issue| !is_closed_state(&issue.state.state_type))
        .collect();
    if open.is_empty() {
        log::info!("No open issues in team {}", team.name);
        return Ok(None);
    }

    let items: Vec<String> = open
        .iter()
        .map(|issue| format!("{}: {}", issue.identifier, issue.title))
        .collect();
    let (index, _) = interaction.selector.select(SELECT_ISSUE, &items, None)?;
    let chosen = open
        .get(index)
        .ok_or_else(|| LinearError::invalid_input(format!("Selection {index} is out of range")))?;

    let issue = ctx.client.issue(&chosen.id).await?.ok_or_else(|| {
        LinearError::invalid_input(format!("Issue {} no longer exists", chosen.identifier))
    })?;
    let team_id = issue.team.id.as_str();
    eprintln!("{}", current_details(&issue, ctx.use_color));

    let title = interaction.prompts.title(Some(&issue.title))?;
    let description = interaction
        .prompts
        .description(issue.description.as_deref())?;

    let project = choose_optional(
        &resolver,
        EntityKind::Project,
        team_id,
        NO_PROJECT,
        issue.project.as_ref().map(|p| p.id.as_str()),
    )
    .await?;
    let assignee = choose_optional(
        &resolver,
        EntityKind::Assignee,
        team_id,
        UNASSIGNED,
        issue.assignee.as_ref().map(|a| a.id.as_str()),
    )
    .await?;
    let state = choose_required(
        &resolver,
        EntityKind::State,
        Some(team_id),
        Some(&issue.state.id),
    )
    .await?;

    let update = IssueUpdate {
        id: issue.id.clone(),
        title: Some(title),
        description,
        project: Relation::from_choice(project),
        assignee: Relation::from_choice(assignee),
        state_id: Some(state.id),
    };

    let spinner = ctx.output.spinner("Updating issue...");
    let updated = ctx.client.update_issue(&update).await;
    spinner.finish_and_clear();
    updated.map(Some)
}

/// Snapshot of the issue shown before its fields are edited
pub fn current_details(issue: &Issue, use_color: bool) -> String {
    format!("Current Issue Details:\n{}", format_issue_detail(issue, use_color))
}
