// ABOUTME: Client library for the Linear GraphQL API used by the issues CLI
// ABOUTME: Transport, typed schemas, name resolution and issue operations

pub mod builder;
pub mod client;
pub mod constants;
pub mod error;
pub mod graphql;
pub mod operations;
pub mod queries;
pub mod resolver;
pub mod selector;
pub mod types;

#[cfg(test)]
mod test_helpers;

pub use builder::LinearClientConfig;
pub use client::LinearClient;
pub use error::LinearError;
pub use operations::{IssueCreate, IssueQuery, IssueUpdate, Relation};
pub use resolver::{Candidate, ChooseOptions, EntityKind, Resolver};
pub use selector::Selector;
pub use types::{Issue, NamedRef, Team, WorkflowState};

pub type Result<T> = std::result::Result<T, LinearError>;
