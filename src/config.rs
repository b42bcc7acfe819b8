use std::env;

use sqlx::postgres::PgSslMode;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub ssl_mode: PgSslMode,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub db: DbConfig,
    pub jwt_secret: String,
    pub server_addr: String,
    pub api_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let port = require("DB_PORT")?;
        let port: u16 = port.parse().map_err(|_| ConfigError::Invalid {
            var: "DB_PORT",
            value: port.clone(),
        })?;

        let ssl_mode: PgSslMode = match get("DB_SSLMODE") {
            Some(mode) => mode.parse().map_err(|_| ConfigError::Invalid {
                var: "DB_SSLMODE",
                value: mode.clone(),
            })?,
            None => PgSslMode::Prefer,
        };

        Ok(Self {
            db: DbConfig {
                host: require("DB_HOST")?,
                port,
                user: require("DB_USER")?,
                password: get("DB_PASS").unwrap_or_default(),
                ssl_mode,
                name: require("DB_NAME")?,
            },
            jwt_secret: require("JWT_SECRET")?,
            server_addr: get("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            api_prefix: get("API_PREFIX").unwrap_or_else(|| "/api".to_string()),
        })
    }
}
