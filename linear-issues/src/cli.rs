// ABOUTME: CLI argument definitions for the Linear issues application
// ABOUTME: Defines the command-line interface structure using clap derive macros

use clap::{Args, Parser, Subcommand};

use crate::types::StateType;

#[derive(Parser, Debug)]
#[command(name = "linear")]
#[command(about = "Manage your Linear issues from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Never prompt; fail instead when input is missing
    #[arg(long, global = true)]
    pub no_input: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage Linear issues
    #[command(subcommand)]
    Issues(IssuesCommand),
}

#[derive(Subcommand, Debug)]
pub enum IssuesCommand {
    /// List issues
    List(ListArgs),
    /// Create a new issue
    Create(CreateArgs),
    /// Modify an existing issue interactively
    Modify(ModifyArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ListArgs {
    /// Filter issues by team name
    #[arg(short, long)]
    pub team: Option<String>,

    /// Filter issues by project name (requires --team)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Filter issues by state type
    #[arg(short = 's', long, value_enum)]
    pub state_type: Option<StateType>,

    /// Maximum number of issues to fetch (50 when unset or not positive)
    #[arg(short, long, allow_negative_numbers = true)]
    pub limit: Option<i32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Pretty print JSON output
    #[arg(long, requires = "json")]
    pub pretty: bool,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct CreateArgs {
    /// Issue title
    #[arg(long)]
    pub title: Option<String>,

    /// Issue description
    #[arg(long)]
    pub description: Option<String>,

    /// Team name
    #[arg(long)]
    pub team: Option<String>,

    /// Project name within the team
    #[arg(long)]
    pub project: Option<String>,

    /// Assignee name within the team
    #[arg(long)]
    pub assignee: Option<String>,

    /// Workflow state name within the team
    #[arg(long)]
    pub state: Option<String>,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ModifyArgs {
    /// Only offer issues in this state type
    #[arg(short = 's', long, value_enum)]
    pub state_type: Option<StateType>,

    /// Maximum number of issues to fetch (50 when unset or not positive)
    #[arg(short, long, allow_negative_numbers = true)]
    pub limit: Option<i32>,
}
