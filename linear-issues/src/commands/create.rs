// ABOUTME: Handler for `issues create`
// ABOUTME: Resolves flags by name, prompts for whatever is missing, then submits the issue

use linear_api::{EntityKind, Issue, IssueCreate, LinearError};

use super::{CommandContext, choose_optional, choose_required};
use crate::cli::CreateArgs;
use crate::constants::ui::{NO_PROJECT, UNASSIGNED};

pub async fn run(ctx: &CommandContext<'_>, args: CreateArgs) -> linear_api::Result<Issue> {
    let interaction = ctx.interaction;
    if interaction.is_none() && (args.title.is_none() || args.team.is_none()) {
        return Err(missing_required());
    }

    let title = match (args.title, interaction) {
        (Some(title), _) => title,
        (None, Some(i)) => i.prompts.title(None)?,
        (None, None) => return Err(missing_required()),
    };

    let description = match (args.description, interaction) {
        (Some(description), _) => Some(description),
        (None, Some(i)) => i.prompts.description(None)?,
        (None, None) => None,
    };

    let resolver = ctx.resolver();
    let team_id = match &args.team {
        Some(team) => resolver.resolve_by_name(EntityKind::Team, None, team).await?,
        None if interaction.is_some() => {
            choose_required(&resolver, EntityKind::Team, None, None).await?.id
        }
        None => return Err(missing_required()),
    };

    let project_id = match (&args.project, interaction) {
        (Some(project), _) => Some(
            resolver
                .resolve_by_name(EntityKind::Project, Some(&team_id), project)
                .await?,
        ),
        (None, Some(_)) => {
            choose_optional(&resolver, EntityKind::Project, &team_id, NO_PROJECT, None).await?
        }
        (None, None) => None,
    };

    let assignee_id = match (&args.assignee, interaction) {
        (Some(assignee), _) => Some(
            resolver
                .resolve_by_name(EntityKind::Assignee, Some(&team_id), assignee)
                .await?,
        ),
        (None, Some(_)) => {
            choose_optional(&resolver, EntityKind::Assignee, &team_id, UNASSIGNED, None).await?
        }
        (None, None) => None,
    };

    let state_id = match (&args.state, interaction) {
        (Some(state), _) => Some(
            resolver
                .resolve_by_name(EntityKind::State, Some(&team_id), state)
                .await?,
        ),
        (None, Some(_)) => Some(
            choose_required(&resolver, EntityKind::State, Some(&team_id), None)
                .await?
                .id,
        ),
        (None, None) => None,
    };

    let input = IssueCreate {
        title,
        team_id,
        description,
        project_id,
        assignee_id,
        state_id,
    };

    let spinner = ctx.output.spinner("Creating issue...");
    let created = ctx.client.create_issue(&input).await;
    spinner.finish_and_clear();
    created
}

fn missing_required() -> LinearError {
    LinearError::invalid_input("--title and --team are required when not running interactively")
}
