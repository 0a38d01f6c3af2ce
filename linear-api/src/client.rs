// ABOUTME: HTTP transport for the Linear GraphQL endpoint
// ABOUTME: Posts {query, variables}, checks status and the errors field, returns raw data

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::Result;
use crate::builder::{LinearClientConfig, parse_endpoint};
use crate::constants::{headers, urls};
use crate::error::LinearError;
use crate::graphql::{GraphQLRequest, GraphQLResponse, Variables};

#[derive(Debug)]
pub struct LinearClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl LinearClient {
    pub fn from_config(config: LinearClientConfig) -> Result<Self> {
        let endpoint = parse_endpoint(
            config
                .endpoint
                .as_deref()
                .unwrap_or(urls::LINEAR_GRAPHQL_ENDPOINT),
        )?;

        // The key goes out verbatim, without a Bearer prefix
        let mut auth_value = HeaderValue::from_str(config.auth_token.expose_secret())
            .map_err(|_| {
                LinearError::Configuration("API key contains invalid header characters".into())
            })?;
        auth_value.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(AUTHORIZATION, auth_value);
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static(headers::JSON));
        default_headers.insert(ACCEPT, HeaderValue::from_static(headers::JSON));
        default_headers.insert(USER_AGENT, HeaderValue::from_static(headers::USER_AGENT));

        let client = reqwest::Client::builder()
            .default_headers(default_headers)
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send a query or mutation and return the raw `data` value.
    pub async fn send(&self, query: &str, variables: Option<&Variables>) -> Result<Value> {
        log::debug!(
            "POST {} {} (variables: {})",
            self.endpoint,
            operation_name(query),
            variables
                .map(|v| v.keys().cloned().collect::<Vec<_>>().join(", "))
                .unwrap_or_default()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&GraphQLRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::debug!("{} returned HTTP {}", operation_name(query), status.as_u16());
            return Err(LinearError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphQLResponse =
            serde_json::from_str(&body).map_err(|e| LinearError::Decode {
                message: e.to_string(),
                body: body.clone(),
            })?;

        envelope.into_data()
    }

    /// Send a query and decode its `data` into the response schema `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<&Variables>,
    ) -> Result<T> {
        let data = self.send(query, variables).await?;
        decode(data)
    }
}

pub(crate) fn decode<T: DeserializeOwned>(data: Value) -> Result<T> {
    T::deserialize(&data).map_err(|e| LinearError::Decode {
        message: e.to_string(),
        body: data.to_string(),
    })
}

/// `query Foo(...)` -> `Foo`, for log lines
fn operation_name(query: &str) -> &str {
    let mut words = query
        .split(|c: char| c.is_whitespace() || c == '(' || c == '{')
        .filter(|word| !word.is_empty());

    match words.next() {
        Some("query" | "mutation") => words.next().unwrap_or("anonymous"),
        _ => "anonymous",
    }
}
