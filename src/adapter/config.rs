//! Service configuration.
//!
//! Sources, highest precedence first:
//! 1. Environment variables prefixed with `USER_SERVICE_`
//! 2. `./config.toml`
//! 3. Defaults

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const ENV_PREFIX: &str = "USER_SERVICE_";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Memory,
    Postgres,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `EnvFilter` directive, e.g. `info` or `user_service=debug`.
    pub log_level: String,
    pub store: StoreKind,
    #[serde(default)]
    pub database_url: Option<String>,
    /// Load the demo users at startup.
    pub seed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            store: StoreKind::Memory,
            database_url: None,
            seed: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] Box<figment::Error>),
    #[error("database_url is required when store is postgres")]
    MissingDatabaseUrl,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(
            Figment::new()
                .merge(Serialized::defaults(AppConfig::default()))
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: AppConfig = figment.extract().map_err(Box::new)?;
        if config.store == StoreKind::Postgres && config.database_url.is_none() {
            return Err(ConfigError::MissingDatabaseUrl);
        }
        Ok(config)
    }

    /// Host and port for `TcpListener::bind`; the host may be a name or an IP.
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    pub fn db_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or(ConfigError::MissingDatabaseUrl)
    }
}
