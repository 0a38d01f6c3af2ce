// ABOUTME: Variable assembly for issue listing, creation and update
// ABOUTME: Applies the nullability rules and checks mutation success flags

use serde_json::{Value, json};

use crate::client::LinearClient;
use crate::constants::limits::DEFAULT_ISSUE_LIMIT;
use crate::error::LinearError;
use crate::graphql::{Variables, VariablesBuilder};
use crate::queries;
use crate::types::{Issue, IssueCreateData, IssueData, IssuePayload, IssueUpdateData, IssuesData};
use crate::Result;

/// A nullable relation (project or assignee) in an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Relation {
    #[default]
    Unchanged,
    Clear,
    Set(String),
}

impl Relation {
    /// `Some(id)` sets, `None` clears
    pub fn from_choice(choice: Option<String>) -> Self {
        match choice {
            Some(id) => Relation::Set(id),
            None => Relation::Clear,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueCreate {
    pub title: String,
    pub team_id: String,
    pub description: Option<String>,
    pub project_id: Option<String>,
    pub assignee_id: Option<String>,
    pub state_id: Option<String>,
}

impl IssueCreate {
    pub fn new(title: impl Into<String>, team_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            team_id: team_id.into(),
            description: None,
            project_id: None,
            assignee_id: None,
            state_id: None,
        }
    }

    pub fn variables(&self) -> Result<Variables> {
        let title = non_blank(Some(self.title.as_str()))
            .ok_or_else(|| LinearError::invalid_input("Issue title cannot be empty"))?;

        Ok(VariablesBuilder::new()
            .variable("title", title)
            .optional("description", non_blank(self.description.as_deref()))
            .variable("teamId", self.team_id.as_str())
            .nullable("projectId", self.project_id.as_deref())
            .nullable("assigneeId", self.assignee_id.as_deref())
            .optional("stateId", self.state_id.as_deref())
            .build())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueUpdate {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub project: Relation,
    pub assignee: Relation,
    pub state_id: Option<String>,
}

impl IssueUpdate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn variables(&self) -> Variables {
        let builder = VariablesBuilder::new()
            .variable("id", self.id.as_str())
            .optional("title", non_blank(self.title.as_deref()))
            .optional("description", non_blank(self.description.as_deref()));
        let builder = relation(builder, "projectId", &self.project);
        let builder = relation(builder, "assigneeId", &self.assignee);

        builder.optional("stateId", self.state_id.as_deref()).build()
    }
}

/// Listing parameters; every constraint is optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueQuery {
    pub team_id: Option<String>,
    pub project_id: Option<String>,
    pub state_type: Option<String>,
    pub limit: Option<i32>,
}

impl IssueQuery {
    pub fn first(&self) -> i32 {
        match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_ISSUE_LIMIT,
        }
    }

    pub fn filter(&self) -> Option<Value> {
        let mut filter = serde_json::Map::new();
        if let Some(team_id) = &self.team_id {
            filter.insert("team".into(), json!({"id": {"eq": team_id}}));
        }
        if let Some(project_id) = &self.project_id {
            filter.insert("project".into(), json!({"id": {"eq": project_id}}));
        }
        if let Some(state_type) = &self.state_type {
            filter.insert("state".into(), json!({"type": {"eq": state_type}}));
        }
        (!filter.is_empty()).then_some(Value::Object(filter))
    }

    pub fn variables(&self) -> Variables {
        VariablesBuilder::new()
            .optional("filter", self.filter())
            .variable("first", self.first())
            .build()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn relation(builder: VariablesBuilder, name: &str, relation: &Relation) -> VariablesBuilder {
    match relation {
        Relation::Unchanged => builder,
        Relation::Clear => builder.variable(name, Value::Null),
        Relation::Set(id) => builder.variable(name, id.as_str()),
    }
}

fn accepted(payload: IssuePayload, operation: &'static str) -> Result<Issue> {
    if !payload.success {
        return Err(LinearError::MutationFailed { operation });
    }
    payload.issue.ok_or_else(|| LinearError::Decode {
        message: format!("{operation} succeeded without returning the issue"),
        body: String::new(),
    })
}

impl LinearClient {
    pub async fn list_issues(&self, query: &IssueQuery) -> Result<Vec<Issue>> {
        log::info!("Fetching up to {} issues", query.first());
        let data: IssuesData = self
            .execute(queries::LIST_ISSUES, Some(&query.variables()))
            .await?;
        Ok(data.issues.nodes)
    }

    /// Detail lookup; `None` when the id is unknown
    pub async fn issue(&self, id: &str) -> Result<Option<Issue>> {
        let variables = VariablesBuilder::new().variable("id", id).build();
        let data: IssueData = self.execute(queries::ISSUE_BY_ID, Some(&variables)).await?;
        Ok(data.issue)
    }

    pub async fn create_issue(&self, input: &IssueCreate) -> Result<Issue> {
        let variables = input.variables()?;
        let data: IssueCreateData = self.execute(queries::CREATE_ISSUE, Some(&variables)).await?;
        accepted(data.issue_create, "issueCreate")
    }

    pub async fn update_issue(&self, input: &IssueUpdate) -> Result<Issue> {
        let data: IssueUpdateData = self
            .execute(queries::UPDATE_ISSUE, Some(&input.variables()))
            .await?;
        accepted(data.issue_update, "issueUpdate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{
        mock_create_issue_failure_response, mock_create_issue_response, mock_issues_response,
        mock_issue_not_found_response, mock_linear_server, mock_update_issue_failure_response,
        mock_update_issue_response, test_client,
    };
    use mockito::Matcher;

    fn create_input() -> IssueCreate {
        IssueCreate {
            description: Some("   ".to_string()),
            ..IssueCreate::new("Fix login", "T1")
        }
    }

    #[test]
    fn test_blank_description_is_omitted() {
        let variables = create_input().variables().unwrap();

        assert!(!variables.contains_key("description"));
        assert_eq!(variables["title"], "Fix login");
        assert_eq!(variables["teamId"], "T1");
    }

    #[test]
    fn test_missing_relations_are_json_null() {
        let variables = create_input().variables().unwrap();

        assert_eq!(variables["projectId"], Value::Null);
        assert_eq!(variables["assigneeId"], Value::Null);
        assert!(!variables.contains_key("stateId"));

        let body = serde_json::to_string(&variables).unwrap();
        assert!(body.contains(r#""projectId":null"#));
        assert!(!body.contains(r#""projectId":"""#));
    }

    #[test]
    fn test_resolved_relations_are_sent() {
        let input = IssueCreate {
            description: Some("  Steps to reproduce  ".to_string()),
            project_id: Some("P1".to_string()),
            assignee_id: Some("U1".to_string()),
            state_id: Some("S1".to_string()),
            ..IssueCreate::new("  Fix login ", "T1")
        };
        let variables = input.variables().unwrap();

        assert_eq!(variables["title"], "Fix login");
        assert_eq!(variables["description"], "Steps to reproduce");
        assert_eq!(variables["projectId"], "P1");
        assert_eq!(variables["assigneeId"], "U1");
        assert_eq!(variables["stateId"], "S1");
    }

    #[test]
    fn test_blank_title_is_invalid() {
        let result = IssueCreate::new("  ", "T1").variables();
        assert!(matches!(result, Err(LinearError::InvalidInput { .. })));
    }

    #[test]
    fn test_update_relations() {
        let update = IssueUpdate {
            title: Some(String::new()),
            project: Relation::Clear,
            assignee: Relation::Set("U2".to_string()),
            ..IssueUpdate::new("issue-1")
        };
        let variables = update.variables();

        assert_eq!(variables["id"], "issue-1");
        assert!(!variables.contains_key("title"));
        assert!(!variables.contains_key("description"));
        assert_eq!(variables["projectId"], Value::Null);
        assert_eq!(variables["assigneeId"], "U2");
        assert!(!variables.contains_key("stateId"));

        let untouched = IssueUpdate::new("issue-1").variables();
        assert!(!untouched.contains_key("projectId"));
        assert!(!untouched.contains_key("assigneeId"));
    }

    #[test]
    fn test_relation_from_choice() {
        assert_eq!(Relation::from_choice(None), Relation::Clear);
        assert_eq!(
            Relation::from_choice(Some("P1".to_string())),
            Relation::Set("P1".to_string())
        );
    }

    #[test]
    fn test_listing_limit_defaults() {
        assert_eq!(IssueQuery::default().first(), 50);
        let zero = IssueQuery {
            limit: Some(0),
            ..IssueQuery::default()
        };
        assert_eq!(zero.first(), 50);
        let negative = IssueQuery {
            limit: Some(-3),
            ..IssueQuery::default()
        };
        assert_eq!(negative.first(), 50);
        let ten = IssueQuery {
            limit: Some(10),
            ..IssueQuery::default()
        };
        assert_eq!(ten.first(), 10);
    }

    #[test]
    fn test_listing_filter_only_has_given_constraints() {
        assert_eq!(IssueQuery::default().filter(), None);
        assert!(!IssueQuery::default().variables().contains_key("filter"));

        let query = IssueQuery {
            team_id: Some("T1".to_string()),
            state_type: Some("started".to_string()),
            ..IssueQuery::default()
        };
        assert_eq!(
            query.filter(),
            Some(json!({
                "team": {"id": {"eq": "T1"}},
                "state": {"type": {"eq": "started"}}
            }))
        );
    }

    #[test]
    fn test_listing_variables_are_deterministic() {
        let query = IssueQuery {
            team_id: Some("T1".to_string()),
            project_id: Some("P1".to_string()),
            state_type: None,
            limit: Some(5),
        };
        assert_eq!(query.variables(), query.variables());
    }

    #[tokio::test]
    async fn test_list_issues_sends_filter_and_first() {
        let mut server = mock_linear_server().await;
        let mock = server
            .mock("POST", "/graphql")
            .match_body(Matcher::PartialJson(json!({
                "variables": {"filter": {"team": {"id": {"eq": "T1"}}}, "first": 50}
            })))
            .with_status(200)
            .with_body(mock_issues_response().to_string())
            .create_async()
            .await;

        let client = test_client(&server);
        let issues = client
            .list_issues(&IssueQuery {
                team_id: Some("T1".to_string()),
                ..IssueQuery::default()
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].identifier, "ENG-1");
        assert_eq!(issues[2].assignee_name(), None);
    }

    #[tokio::test]
    async fn test_create_issue_returns_issue() {
        let mut server = mock_linear_server().await;
        server
            .mock("POST", "/graphql")
            .match_body(Matcher::PartialJson(json!({
                "variables": {"title": "Fix login", "teamId": "T1", "projectId": null}
            })))
            .with_status(200)
            .with_body(mock_create_issue_response().to_string())
            .create_async()
            .await;

        let client = test_client(&server);
        let issue = client.create_issue(&create_input()).await.unwrap();

        assert_eq!(issue.identifier, "ENG-999");
    }

    #[tokio::test]
    async fn test_rejected_create_is_mutation_failure() {
        let mut server = mock_linear_server().await;
        server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_body(mock_create_issue_failure_response().to_string())
            .create_async()
            .await;

        let client = test_client(&server);
        let result = client.create_issue(&create_input()).await;

        match result {
            Err(LinearError::MutationFailed { operation }) => assert_eq!(operation, "issueCreate"),
            other => panic!("Expected mutation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blank_title_never_reaches_the_api() {
        let mut server = mock_linear_server().await;
        let mock = server
            .mock("POST", "/graphql")
            .expect(0)
            .create_async()
            .await;

        let client = test_client(&server);
        let result = client.create_issue(&IssueCreate::new("", "T1")).await;

        assert!(matches!(result, Err(LinearError::InvalidInput { .. })));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_issue_success_and_failure() {
        let mut server = mock_linear_server().await;
        server
            .mock("POST", "/graphql")
            .match_body(Matcher::PartialJson(json!({"variables": {"title": "Renamed"}})))
            .with_status(200)
            .with_body(mock_update_issue_response().to_string())
            .create_async()
            .await;
        server
            .mock("POST", "/graphql")
            .match_body(Matcher::PartialJson(json!({"variables": {"title": "Rejected"}})))
            .with_status(200)
            .with_body(mock_update_issue_failure_response().to_string())
            .create_async()
            .await;

        let client = test_client(&server);
        let renamed = IssueUpdate {
            title: Some("Renamed".to_string()),
            ..IssueUpdate::new("issue-1")
        };
        let issue = client.update_issue(&renamed).await.unwrap();
        assert_eq!(issue.title, "Renamed");

        let rejected = IssueUpdate {
            title: Some("Rejected".to_string()),
            ..IssueUpdate::new("issue-1")
        };
        let result = client.update_issue(&rejected).await;
        assert!(matches!(
            result,
            Err(LinearError::MutationFailed {
                operation: "issueUpdate"
            })
        ));
    }

    #[tokio::test]
    async fn test_unknown_issue_is_none() {
        let mut server = mock_linear_server().await;
        server
            .mock("POST", "/graphql")
            .with_status(200)
            .with_body(mock_issue_not_found_response().to_string())
            .create_async()
            .await;

        let client = test_client(&server);
        assert_eq!(client.issue("missing").await.unwrap(), None);
    }
}
