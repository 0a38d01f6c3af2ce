// ABOUTME: Configuration loading for the Linear issues CLI
// ABOUTME: Layers the TOML file, the .env file and the process environment into client settings

use anyhow::{Context, Result};
use linear_api::{LinearClient, LinearError};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{env, paths};

/// Optional settings read from `config.toml`
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    /// GraphQL endpoint override
    #[serde(default)]
    pub api_url: Option<String>,
    /// Listing size used when `--limit` is not given
    #[serde(default)]
    pub default_limit: Option<i32>,
}

impl Config {
    /// Load configuration from a single file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(self, other: Config) -> Config {
        Config {
            api_url: other.api_url.or(self.api_url),
            default_limit: other.default_limit.or(self.default_limit),
        }
    }
}

/// Everything needed to build a client, after all layers are applied
#[derive(Debug)]
pub struct Settings {
    pub config: Config,
    pub api_key: SecretString,
}

impl Settings {
    /// Load from `~/.config/linear_cli`
    pub fn load() -> Result<Self> {
        match config_dir() {
            Some(dir) => Self::load_from_dir(&dir),
            None => {
                log::warn!("Could not determine the home directory, using the environment only");
                Self::from_env(Config::default())
            }
        }
    }

    /// Load `config.toml` and `.env` from `dir`, then apply the environment.
    ///
    /// Either file may be missing. Variables already present in the process
    /// environment win over the `.env` file.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(paths::CONFIG_FILE);
        let config = if config_path.exists() {
            log::debug!("Loading config from {}", config_path.display());
            Config::load_from_file(&config_path)?
        } else {
            Config::default()
        };

        let env_path = dir.join(paths::ENV_FILE);
        if env_path.exists() {
            log::debug!("Loading environment from {}", env_path.display());
            dotenvy::from_path(&env_path)
                .with_context(|| format!("Failed to load env file: {}", env_path.display()))?;
        }

        Self::from_env(config)
    }

    fn from_env(config: Config) -> Result<Self> {
        let api_key = read_var(env::API_KEY)
            .or_else(|| read_var(env::LEGACY_API_KEY))
            .ok_or_else(|| {
                LinearError::Configuration(format!(
                    "No API key found. Set {} (or {})",
                    env::API_KEY,
                    env::LEGACY_API_KEY
                ))
            })?;

        let config = config.merge(Config {
            api_url: read_var(env::API_URL),
            default_limit: None,
        });

        Ok(Self {
            config,
            api_key: SecretString::new(api_key.into_boxed_str()),
        })
    }

    pub fn client(&self) -> Result<LinearClient> {
        let api_key = SecretString::new(self.api_key.expose_secret().into());
        let builder = LinearClient::builder().auth_token(api_key);
        let client = match &self.config.api_url {
            Some(url) => builder.endpoint(url.clone()).build()?,
            None => builder.build()?,
        };
        Ok(client)
    }
}

/// `~/.config/linear_cli`
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(paths::CONFIG_DIR))
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
