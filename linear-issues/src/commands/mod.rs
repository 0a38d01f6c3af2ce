// ABOUTME: Command handlers for the issues subcommands and the shared command context
// ABOUTME: Wires the client, resolver and prompts together and prints each command's result

pub mod create;
pub mod list;
pub mod modify;

use anyhow::Result;
use linear_api::{
    Candidate, ChooseOptions, EntityKind, LinearClient, LinearError, Resolver, Selector,
};

use crate::cli::IssuesCommand;
use crate::cli_output::CliOutput;
use crate::config::Config;
use crate::interactive::TextPrompts;
use crate::output::format_issue_detail;

/// Terminal input available to a command when running interactively
#[derive(Clone, Copy)]
pub struct Interaction<'a> {
    pub selector: &'a dyn Selector,
    pub prompts: &'a dyn TextPrompts,
}

pub struct CommandContext<'a> {
    pub client: &'a LinearClient,
    pub interaction: Option<Interaction<'a>>,
    pub output: &'a CliOutput,
    pub use_color: bool,
}

impl<'a> CommandContext<'a> {
    /// Resolver that prompts on ambiguity only when interactive
    pub fn resolver(&self) -> Resolver<'a> {
        Resolver::with_selector(self.client, self.interaction.map(|i| i.selector))
    }

    pub fn require_interaction(&self, command: &str) -> linear_api::Result<Interaction<'a>> {
        self.interaction.ok_or_else(|| {
            LinearError::invalid_input(format!("'{command}' requires an interactive terminal"))
        })
    }
}

/// Dispatch an issues subcommand and print its result
pub async fn run(command: IssuesCommand, ctx: &CommandContext<'_>, config: &Config) -> Result<()> {
    match command {
        IssuesCommand::List(args) => {
            let issues = list::fetch(ctx, &args, config.default_limit).await?;
            match list::render(&issues, &args, ctx.use_color)? {
                Some(rendered) => println!("{rendered}"),
                None => println!("No issues found."),
            }
        }
        IssuesCommand::Create(args) => {
            let issue = create::run(ctx, args).await?;
            ctx.output.success("Issue created successfully!");
            println!("{}", format_issue_detail(&issue, ctx.use_color));
        }
        IssuesCommand::Modify(args) => match modify::run(ctx, &args).await? {
            Some(issue) => {
                ctx.output.success("Issue updated successfully!");
                println!("{}", format_issue_detail(&issue, ctx.use_color));
            }
            None => ctx.output.info("No open issues to modify for the selected team."),
        },
    }
    Ok(())
}

/// Browse a kind where a choice is mandatory
pub(crate) async fn choose_required(
    resolver: &Resolver<'_>,
    kind: EntityKind,
    scope: Option<&str>,
    current: Option<&str>,
) -> linear_api::Result<Candidate> {
    let chosen = resolver
        .choose(
            kind,
            scope,
            ChooseOptions {
                none_label: None,
                current,
            },
        )
        .await?;

    let candidate = chosen.ok_or_else(|| LinearError::invalid_input(format!("No {kind} selected")))?;
    log::info!("Selected {}: {} (ID: {})", kind.title(), candidate.name, candidate.id);
    Ok(candidate)
}

/// Browse a nullable relation; `None` is the explicit "no selection" entry
pub(crate) async fn choose_optional(
    resolver: &Resolver<'_>,
    kind: EntityKind,
    scope: &str,
    none_label: &str,
    current: Option<&str>,
) -> linear_api::Result<Option<String>> {
    let chosen = resolver
        .choose(
            kind,
            Some(scope),
            ChooseOptions {
                none_label: Some(none_label),
                current,
            },
        )
        .await?;

    match &chosen {
        Some(candidate) => {
            log::info!("Selected {}: {} (ID: {})", kind.title(), candidate.name, candidate.id)
        }
        None => log::info!("Selected {}: {none_label}", kind.title()),
    }
    Ok(chosen.map(|candidate| candidate.id))
}
