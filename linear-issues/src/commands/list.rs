// ABOUTME: Handler for `issues list`
// ABOUTME: Resolves the team and project filters and renders the matching issues

use anyhow::Result;
use linear_api::{EntityKind, Issue, IssueQuery, LinearError};

use super::CommandContext;
use crate::cli::ListArgs;
use crate::output::{JsonFormatter, OutputFormat, TableFormatter};

/// Resolve filter names and fetch one page of issues
pub async fn fetch(
    ctx: &CommandContext<'_>,
    args: &ListArgs,
    default_limit: Option<i32>,
) -> linear_api::Result<Vec<Issue>> {
    if args.project.is_some() && args.team.is_none() {
        return Err(LinearError::invalid_input(
            "--project requires --team, since projects are looked up within a team",
        ));
    }

    let resolver = ctx.resolver();
    let team_id = match &args.team {
        Some(team) => Some(resolver.resolve_by_name(EntityKind::Team, None, team).await?),
        None => None,
    };
    let project_id = match &args.project {
        Some(project) => Some(
            resolver
                .resolve_by_name(EntityKind::Project, team_id.as_deref(), project)
                .await?,
        ),
        None => None,
    };

    let query = IssueQuery {
        team_id,
        project_id,
        state_type: args.state_type.map(|t| t.as_str().to_string()),
        limit: args.limit.or(default_limit),
    };

    let spinner = ctx.output.spinner("Fetching issues...");
    let issues = ctx.client.list_issues(&query).await;
    spinner.finish_and_clear();

    let issues = issues?;
    log::debug!("Found {} issues", issues.len());
    Ok(issues)
}

/// Table or JSON text; `None` when a table would be empty
pub fn render(issues: &[Issue], args: &ListArgs, use_color: bool) -> Result<Option<String>> {
    if args.json {
        return JsonFormatter::new(args.pretty).format_issues(issues).map(Some);
    }
    if issues.is_empty() {
        return Ok(None);
    }
    TableFormatter::new(use_color).format_issues(issues).map(Some)
}
