// ABOUTME: Centralized constants for the Linear API client
// ABOUTME: Contains endpoint URLs, request headers and listing limits

/// Linear API URLs
pub mod urls {
    /// GraphQL endpoint of the Linear API
    pub const LINEAR_GRAPHQL_ENDPOINT: &str = "https://api.linear.app/graphql";
}

/// Request header values
pub mod headers {
    pub const USER_AGENT: &str = concat!("linear-issues/", env!("CARGO_PKG_VERSION"));
    pub const JSON: &str = "application/json";
}

/// Listing limits
pub mod limits {
    /// Page size used when no positive limit is given
    pub const DEFAULT_ISSUE_LIMIT: i32 = 50;
}
