// ABOUTME: Resolves human-readable team, project, assignee and status names into API ids
// ABOUTME: Applies the zero/one/many match policy and falls back to interactive selection

use serde::Deserialize;
use std::fmt;

use crate::client::LinearClient;
use crate::error::LinearError;
use crate::graphql::{Connection, VariablesBuilder};
use crate::queries;
use crate::selector::Selector;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Team,
    Project,
    Assignee,
    State,
}

impl EntityKind {
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Team => "Team",
            EntityKind::Project => "Project",
            EntityKind::Assignee => "Assignee",
            EntityKind::State => "State",
        }
    }

    /// Label shown above the interactive list
    pub fn prompt_label(&self) -> &'static str {
        match self {
            EntityKind::Team => "Select Team",
            EntityKind::Project => "Select Project",
            EntityKind::Assignee => "Select Assignee",
            EntityKind::State => "Select Status",
        }
    }

    /// Everything but teams lives under a team
    pub fn is_team_scoped(&self) -> bool {
        !matches!(self, EntityKind::Team)
    }

    fn lookup_query(&self) -> &'static str {
        match self {
            EntityKind::Team => queries::TEAMS_BY_NAME,
            EntityKind::Project => queries::TEAM_PROJECTS_BY_NAME,
            EntityKind::Assignee => queries::TEAM_MEMBERS_BY_NAME,
            EntityKind::State => queries::TEAM_STATES_BY_NAME,
        }
    }

    fn list_query(&self) -> &'static str {
        match self {
            EntityKind::Team => queries::TEAMS,
            EntityKind::Project => queries::TEAM_PROJECTS,
            EntityKind::Assignee => queries::TEAM_MEMBERS,
            EntityKind::State => queries::TEAM_STATES,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Team => "team",
            EntityKind::Project => "project",
            EntityKind::Assignee => "assignee",
            EntityKind::State => "state",
        };
        write!(f, "{}", name)
    }
}

/// One lookup result; `state_type` is only populated for states
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub state_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TeamsData {
    teams: Connection<Candidate>,
}

#[derive(Debug, Deserialize)]
struct TeamScopedData {
    team: Option<CandidateSet>,
}

#[derive(Debug, Deserialize)]
struct CandidateSet {
    candidates: Connection<Candidate>,
}

/// Options for browsing a full candidate list
#[derive(Debug, Clone, Copy, Default)]
pub struct ChooseOptions<'o> {
    /// Entry prepended to the list that stands for "no selection"
    pub none_label: Option<&'o str>,
    /// Id of the current value, used to position the cursor
    pub current: Option<&'o str>,
}

pub struct Resolver<'a> {
    client: &'a LinearClient,
    selector: Option<&'a dyn Selector>,
}

impl<'a> Resolver<'a> {
    /// A resolver that never prompts; ambiguity is an error
    pub fn new(client: &'a LinearClient) -> Self {
        Self {
            client,
            selector: None,
        }
    }

    pub fn with_selector(client: &'a LinearClient, selector: Option<&'a dyn Selector>) -> Self {
        Self { client, selector }
    }

    pub fn is_interactive(&self) -> bool {
        self.selector.is_some()
    }

    /// Turn a name into exactly one id.
    ///
    /// `scope` is the owning team id; it is required for every kind except
    /// [`EntityKind::Team`], where it is ignored.
    pub async fn resolve_by_name(
        &self,
        kind: EntityKind,
        scope: Option<&str>,
        name: &str,
    ) -> Result<String> {
        log::info!("Looking up {kind} ID for name '{name}'");
        let candidates = self.fetch(kind, scope, Some(name)).await?;
        let id = self.disambiguate(kind, scope, name, candidates)?;
        log::debug!("Resolved {kind} '{name}' to {id}");
        Ok(id)
    }

    /// The unfiltered candidate list for a kind
    pub async fn candidates(&self, kind: EntityKind, scope: Option<&str>) -> Result<Vec<Candidate>> {
        self.fetch(kind, scope, None).await
    }

    /// Let the user browse every candidate of a kind and pick one.
    ///
    /// Returns `None` only when the `none_label` entry was chosen.
    pub async fn choose(
        &self,
        kind: EntityKind,
        scope: Option<&str>,
        options: ChooseOptions<'_>,
    ) -> Result<Option<Candidate>> {
        let selector = self.selector.ok_or_else(|| {
            LinearError::invalid_input(format!(
                "Choosing a {kind} requires an interactive terminal"
            ))
        })?;

        let candidates = self.candidates(kind, scope).await?;
        if candidates.is_empty() {
            match options.none_label {
                Some(label) => log::warn!("No {kind}s found, only '{label}' is available"),
                None => {
                    return Err(LinearError::NotFound {
                        kind,
                        name: String::new(),
                        scope: scope.map(str::to_string),
                    });
                }
            }
        }

        let offset = usize::from(options.none_label.is_some());
        let mut items = Vec::with_capacity(candidates.len() + offset);
        items.extend(options.none_label.map(str::to_string));
        items.extend(candidates.iter().map(|c| c.name.clone()));

        let default_index = match options.current {
            Some(current) => candidates
                .iter()
                .position(|c| c.id == current)
                .map(|i| i + offset),
            None if offset == 1 => Some(0),
            None => None,
        };

        let (index, _) = selector.select(kind.prompt_label(), &items, default_index)?;
        if offset == 1 && index == 0 {
            return Ok(None);
        }

        candidates
            .get(index - offset)
            .cloned()
            .map(Some)
            .ok_or_else(|| LinearError::invalid_input(format!("Selection {index} is out of range")))
    }

    fn disambiguate(
        &self,
        kind: EntityKind,
        scope: Option<&str>,
        name: &str,
        mut candidates: Vec<Candidate>,
    ) -> Result<String> {
        match candidates.len() {
            0 => Err(LinearError::NotFound {
                kind,
                name: name.to_string(),
                scope: scope.map(str::to_string),
            }),
            1 => Ok(candidates.remove(0).id),
            // Project names collide rarely; take the first instead of failing
            _ if kind == EntityKind::Project => {
                log::warn!(
                    "Multiple projects found with name '{name}' in team (ID: {}). Using the first one found.",
                    scope.unwrap_or_default()
                );
                Ok(candidates.remove(0).id)
            }
            _ => match self.selector {
                Some(selector) => {
                    let names: Vec<String> = candidates.iter().map(|c| c.name.clone()).collect();
                    let label = format!("Multiple {kind}s named '{name}'. {}", kind.prompt_label());
                    let (index, _) = selector.select(&label, &names, None)?;
                    candidates.get(index).map(|c| c.id.clone()).ok_or_else(|| {
                        LinearError::invalid_input(format!("Selection {index} is out of range"))
                    })
                }
                None => Err(LinearError::Ambiguous {
                    kind,
                    name: name.to_string(),
                    candidates: candidates.into_iter().map(|c| c.name).collect(),
                }),
            },
        }
    }

    async fn fetch(
        &self,
        kind: EntityKind,
        scope: Option<&str>,
        name: Option<&str>,
    ) -> Result<Vec<Candidate>> {
        let query = if name.is_some() {
            kind.lookup_query()
        } else {
            kind.list_query()
        };
        let builder = VariablesBuilder::new().optional("name", name);

        if !kind.is_team_scoped() {
            let variables = builder.build();
            let variables = (!variables.is_empty()).then_some(&variables);
            let data: TeamsData = self.client.execute(query, variables).await?;
            return Ok(data.teams.nodes);
        }

        let team_id = scope.ok_or_else(|| {
            LinearError::invalid_input(format!("Looking up a {kind} requires a resolved team"))
        })?;
        let variables = builder.variable("teamId", team_id).build();
        let data: TeamScopedData = self.client.execute(query, Some(&variables)).await?;

        // An unknown team id yields `team: null`, which reads as no matches
        Ok(data.team.map(|team| team.candidates.nodes).unwrap_or_default())
    }
}
