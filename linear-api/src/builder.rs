// ABOUTME: Builder pattern implementation for LinearClient configuration
// ABOUTME: Threads the API key and endpoint into the client at construction time

use crate::LinearClient;
use crate::error::LinearError;
use secrecy::SecretString;
use typed_builder::TypedBuilder;
use url::Url;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<LinearClient, LinearError>))]
pub struct LinearClientConfig {
    pub auth_token: SecretString,

    /// Full GraphQL endpoint URL; the public Linear endpoint when unset
    #[builder(default = None, setter(strip_option))]
    pub endpoint: Option<String>,
}

impl From<LinearClientConfig> for Result<LinearClient, LinearError> {
    fn from(config: LinearClientConfig) -> Self {
        LinearClient::from_config(config)
    }
}

impl LinearClient {
    pub fn builder() -> LinearClientConfigBuilder<((), ())> {
        LinearClientConfig::builder()
    }
}

pub(crate) fn parse_endpoint(endpoint: &str) -> Result<Url, LinearError> {
    let url = Url::parse(endpoint)
        .map_err(|e| LinearError::Configuration(format!("Invalid API URL '{endpoint}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(LinearError::Configuration(format!(
            "Invalid API URL '{endpoint}': unsupported scheme '{scheme}'"
        ))),
    }
}
