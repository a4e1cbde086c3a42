//! API server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Database (one of)
//! - `TODO_API_DATABASE_URL` - `PostgreSQL` connection string
//! - `DATABASE_URL` - Generic fallback connection string
//! - `APP_DB_USERNAME`, `APP_DB_PASSWORD`, `APP_DB_NAME` (+ optional
//!   `APP_DB_HOST`, default `localhost`) - Composed into a connection string
//!
//! ## Optional
//! - `TODO_API_HOST` - Bind address (default: 127.0.0.1)
//! - `TODO_API_PORT` - Listen port (default: 8010)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of errors sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no database URL can be determined or a
    /// variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to resolve variable names.
    ///
    /// # Errors
    ///
    /// See [`ApiConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = database_url_from_lookup(&lookup)?;

        let host = parse_or_default::<IpAddr, _>(&lookup, "TODO_API_HOST", "127.0.0.1")?;
        let port = parse_or_default::<u16, _>(&lookup, "TODO_API_PORT", "8010")?;

        let sentry_sample_rate = parse_or_default::<f32, _>(&lookup, "SENTRY_SAMPLE_RATE", "1.0")?;
        let sentry_traces_sample_rate =
            parse_or_default::<f32, _>(&lookup, "SENTRY_TRACES_SAMPLE_RATE", "0.0")?;

        Ok(Self {
            database_url,
            host,
            port,
            sentry_dsn: lookup("SENTRY_DSN"),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Resolve the database URL from the process environment.
///
/// Used by the CLI, which needs the database but none of the server settings.
///
/// # Errors
///
/// Returns `ConfigError::MissingEnvVar` if no source of a URL is set.
pub fn database_url_from_env() -> Result<SecretString, ConfigError> {
    let _ = dotenvy::dotenv();
    database_url_from_lookup(&|key: &str| std::env::var(key).ok())
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Resolve the database URL: explicit URL first, then `DATABASE_URL`, then
/// the `APP_DB_*` parts.
fn database_url_from_lookup<F>(lookup: &F) -> Result<SecretString, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("TODO_API_DATABASE_URL") {
        return Ok(SecretString::from(url));
    }

    if let Some(url) = lookup("DATABASE_URL") {
        return Ok(SecretString::from(url));
    }

    let user = lookup("APP_DB_USERNAME");
    let password = lookup("APP_DB_PASSWORD");
    let name = lookup("APP_DB_NAME");

    match (user, password, name) {
        (Some(user), Some(password), Some(name)) => {
            let host = lookup("APP_DB_HOST").unwrap_or_else(|| "localhost".to_string());
            Ok(SecretString::from(compose_database_url(
                &user, &password, &host, &name,
            )))
        }
        _ => Err(ConfigError::MissingEnvVar("TODO_API_DATABASE_URL".to_string())),
    }
}

/// Build a `postgres://` URL with TLS disabled.
fn compose_database_url(user: &str, password: &str, host: &str, name: &str) -> String {
    format!(
        "postgres://{}:{}@{host}/{name}?sslmode=disable",
        urlencoding::encode(user),
        urlencoding::encode(password),
    )
}

/// Parse a variable, falling back to `default` when unset.
fn parse_or_default<T, F>(lookup: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .unwrap_or_else(|| default.to_string())
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
