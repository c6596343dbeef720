//! Application configuration.
//!
//! Loaded once at startup from the YAML file named by `CONFIG_PATH`, with
//! `APP__SECTION__KEY` environment variables layered on top. Every field has
//! a default suitable for local development.

use std::path::Path;
use std::str::FromStr;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Environment variable holding the path to the configuration file.
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Deployment environment name (default: `development`).
    #[serde(default = "default_env")]
    pub env: String,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub http_server: HttpServerConfig,
}

/// PostgreSQL connection parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
    /// One of `disable`, `allow`, `prefer`, `require`, `verify-ca`, `verify-full`.
    pub sslmode: String,
    pub max_connections: u32,
}

/// HTTP listener and middleware settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    pub address: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    /// Upper bound on draining in-flight requests after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    pub cors_origins: Vec<String>,
}

fn default_env() -> String {
    "development".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: default_env(),
            database: DatabaseConfig::default(),
            http_server: HttpServerConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            dbname: "postgres".to_string(),
            user: "root".to_string(),
            password: String::new(),
            sslmode: "disable".to_string(),
            max_connections: 20,
        }
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            address: "localhost".to_string(),
            port: 8080,
            request_timeout_secs: 30,
            shutdown_timeout_secs: 30,
            cors_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl AppConfig {
    /// Load configuration from the file named by [`CONFIG_PATH_ENV`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).map_err(|_| {
            ConfigError::Message(format!("{CONFIG_PATH_ENV} environment variable not set"))
        })?;
        Self::from_file(Path::new(&path))
    }

    /// Load configuration from `path`, then apply `APP__*` overrides.
    ///
    /// The file format is inferred from the extension (`.yaml`, `.yml`,
    /// `.toml`, `.json`).
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::Message(format!(
                "config file does not exist: {}",
                path.display()
            )));
        }

        Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

impl DatabaseConfig {
    /// Build sqlx connection options from the individual parameters.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let ssl_mode = PgSslMode::from_str(&self.sslmode)?;
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
            .ssl_mode(ssl_mode))
    }
}
