// ABOUTME: GraphQL wire envelope shared by every query and mutation
// ABOUTME: Serializes {query, variables} requests and unpacks {data, errors} responses

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LinearError;

/// Variables sent alongside a query, keyed by GraphQL variable name
pub type Variables = Map<String, Value>;

/// Request body posted to the GraphQL endpoint
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<&'a Variables>,
}

/// Raw response envelope; `data` is decoded by the caller into a typed schema
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub errors: Value,
}

impl GraphQLResponse {
    /// Servers report application errors inside a 2xx response, so a
    /// non-null `errors` field fails the request regardless of status.
    pub fn into_data(self) -> Result<Value, LinearError> {
        if !self.errors.is_null() {
            return Err(LinearError::Api {
                errors: self.errors.to_string(),
            });
        }
        Ok(self.data)
    }
}

/// A `{ nodes: [...] }` connection as returned by list fields
#[derive(Debug, Clone, Deserialize)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}

/// Builder for a variables map
#[derive(Debug, Clone, Default)]
pub struct VariablesBuilder {
    variables: Variables,
}

impl VariablesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable
    pub fn variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Add a variable only when a value is present; `None` leaves the key out
    pub fn optional(self, name: impl Into<String>, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.variable(name, value),
            None => self,
        }
    }

    /// Add a variable that is always sent, as JSON null when absent
    pub fn nullable(self, name: impl Into<String>, value: Option<impl Into<Value>>) -> Self {
        let value = value.map_or(Value::Null, Into::into);
        self.variable(name, value)
    }

    pub fn build(self) -> Variables {
        self.variables
    }
}
