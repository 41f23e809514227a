// Runtime configuration read from the environment (optionally seeded from `.env`).

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::PgSslMode;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Local,
    Dev,
    Prod,
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => Err(format!("unknown environment {other:?}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct PassportApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub port: u16,
    /// `None` selects the in-memory stores.
    pub database: Option<DatabaseConfig>,
    pub passport_api: PassportApiConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine; the process environment still applies.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let vars = Vars { lookup: &lookup };

        let environment = vars.parsed_or("APP_ENV", Environment::Local)?;
        let port = vars.parsed_or("PORT", 8080)?;

        let database = match vars.optional("DB_HOST") {
            Some(host) => Some(DatabaseConfig {
                host,
                port: vars.parsed_or("DB_PORT", 5432)?,
                username: vars.required("DB_USERNAME")?,
                password: vars.optional("DB_PASSWORD").unwrap_or_default(),
                name: vars.required("DB_NAME")?,
                ssl_mode: vars.parsed_or("SSL_MODE", PgSslMode::Disable)?,
                max_connections: vars.parsed_or("DB_MAX_CONNECTIONS", 10)?,
            }),
            None => None,
        };

        let passport_api = PassportApiConfig {
            base_url: vars.required("API_URL")?,
            timeout: Duration::from_secs(vars.parsed_or("API_TIMEOUT_SECS", 10)?),
        };

        Ok(Self {
            environment,
            port,
            database,
            passport_api,
        })
    }
}

struct Vars<'a, F: Fn(&str) -> Option<String>> {
    lookup: &'a F,
}

impl<F: Fn(&str) -> Option<String>> Vars<'_, F> {
    fn optional(&self, var: &str) -> Option<String> {
        (self.lookup)(var).filter(|value| !value.trim().is_empty())
    }

    fn required(&self, var: &'static str) -> Result<String, ConfigError> {
        self.optional(var).ok_or(ConfigError::Missing(var))
    }

    fn parsed_or<T>(&self, var: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: ToString,
    {
        match self.optional(var) {
            Some(raw) => raw.trim().parse().map_err(|error: T::Err| ConfigError::Invalid {
                var,
                reason: error.to_string(),
            }),
            None => Ok(default),
        }
    }
}
