// ABOUTME: GraphQL documents sent by the client
// ABOUTME: Lookup queries use a `candidates` alias so every team-scoped kind decodes alike

/// Fields selected for every issue, in listings, detail lookups and mutation payloads
macro_rules! issue_fields {
    () => {
        "id identifier title description \
         state { id name type } \
         team { id name } \
         project { id name } \
         assignee { id name }"
    };
}

pub const TEAMS: &str = "query Teams { teams { nodes { id name } } }";

pub const TEAMS_BY_NAME: &str = "query TeamsByName($name: String!) { \
     teams(filter: { name: { eq: $name } }) { nodes { id name } } }";

pub const TEAM_PROJECTS: &str = "query TeamProjects($teamId: String!) { \
     team(id: $teamId) { candidates: projects { nodes { id name } } } }";

pub const TEAM_PROJECTS_BY_NAME: &str = "query TeamProjectsByName($teamId: String!, $name: String!) { \
     team(id: $teamId) { candidates: projects(filter: { name: { eq: $name } }) { nodes { id name } } } }";

pub const TEAM_MEMBERS: &str = "query TeamMembers($teamId: String!) { \
     team(id: $teamId) { candidates: members { nodes { id name } } } }";

pub const TEAM_MEMBERS_BY_NAME: &str = "query TeamMembersByName($teamId: String!, $name: String!) { \
     team(id: $teamId) { candidates: members(filter: { name: { eq: $name } }) { nodes { id name } } } }";

pub const TEAM_STATES: &str = "query TeamStates($teamId: String!) { \
     team(id: $teamId) { candidates: states { nodes { id name type } } } }";

pub const TEAM_STATES_BY_NAME: &str = "query TeamStatesByName($teamId: String!, $name: String!) { \
     team(id: $teamId) { candidates: states(filter: { name: { eq: $name } }) { nodes { id name type } } } }";

pub const LIST_ISSUES: &str = concat!(
    "query ListIssues($filter: IssueFilter, $first: Int) { ",
    "issues(filter: $filter, first: $first) { nodes { ",
    issue_fields!(),
    " } } }"
);

pub const ISSUE_BY_ID: &str = concat!(
    "query IssueById($id: String!) { issue(id: $id) { ",
    issue_fields!(),
    " } }"
);

pub const CREATE_ISSUE: &str = concat!(
    "mutation CreateIssue($title: String!, $description: String, $teamId: String!, ",
    "$projectId: String, $assigneeId: String, $stateId: String) { ",
    "issueCreate(input: { title: $title, description: $description, teamId: $teamId, ",
    "projectId: $projectId, assigneeId: $assigneeId, stateId: $stateId }) { ",
    "success issue { ",
    issue_fields!(),
    " } } }"
);

pub const UPDATE_ISSUE: &str = concat!(
    "mutation UpdateIssue($id: String!, $title: String, $description: String, ",
    "$projectId: String, $assigneeId: String, $stateId: String) { ",
    "issueUpdate(id: $id, input: { title: $title, description: $description, ",
    "projectId: $projectId, assigneeId: $assigneeId, stateId: $stateId }) { ",
    "success issue { ",
    issue_fields!(),
    " } } }"
);
