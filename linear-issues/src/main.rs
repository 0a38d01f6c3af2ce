// ABOUTME: Main entry point for the Linear issues CLI
// ABOUTME: Sets up logging and colors, loads settings and maps errors to exit codes

use anyhow::Result;
use clap::Parser;
use linear_api::LinearError;
use linear_issues::cli::{Cli, Commands};
use linear_issues::cli_output::CliOutput;
use linear_issues::commands::{self, CommandContext, Interaction};
use linear_issues::config::Settings;
use linear_issues::interactive::InteractivePrompter;
use linear_issues::selector::TerminalSelector;
use std::io::IsTerminal;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let use_color = should_use_color(cli.no_color);
    let output = CliOutput::with_color(use_color && std::io::stderr().is_terminal());

    // The SIGINT handler has to exist before the first prompt: text prompts
    // raise SIGINT on Ctrl-C, then report an interrupted read as `Cancelled`
    let outcome: Result<()> = tokio::select! {
        biased;
        Ok(()) = tokio::signal::ctrl_c() => Err(LinearError::Cancelled.into()),
        result = run(cli, &output, use_color) => result,
    };

    if let Err(error) = outcome {
        let linear_error = error.downcast_ref::<LinearError>();
        if linear_error.is_some_and(LinearError::is_cancelled) {
            log::debug!("Cancelled by user");
            return;
        }

        output.error(&format!("{error:#}"));
        if let Some(help) = linear_error.and_then(LinearError::help_text) {
            output.help(help);
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &CliOutput, use_color: bool) -> Result<()> {
    let settings = Settings::load()?;
    let client = settings.client()?;

    let prompter = InteractivePrompter::new(cli.no_input);
    let selector = TerminalSelector::new(use_color);
    let interaction = prompter.should_prompt().then_some(Interaction {
        selector: &selector,
        prompts: &prompter,
    });
    if interaction.is_none() {
        log::debug!("Running without prompts");
    }

    let ctx = CommandContext {
        client: &client,
        interaction,
        output,
        use_color,
    };

    match cli.command {
        Commands::Issues(command) => commands::run(command, &ctx, &settings.config).await,
    }
}

/// `--verbose` turns on debug records for this workspace; RUST_LOG wins over both
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,linear=debug,linear_issues=debug,linear_api=debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn should_use_color(no_color: bool) -> bool {
    !no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::env::var("TERM").unwrap_or_default() != "dumb"
        && std::io::stdout().is_terminal()
}
