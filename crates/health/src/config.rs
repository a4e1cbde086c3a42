//! Health server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HEALTH_HOST` - Bind address (default: 0.0.0.0)
//! - `HEALTH_PORT` - Listen port (default: 8080)
//! - `HEALTH_SHUTDOWN_GRACE_SECS` - Graceful shutdown bound in seconds (default: 10)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Health server configuration.
#[derive(Debug, Clone, Copy)]
pub struct HealthConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// How long in-flight requests may run after a shutdown signal
    pub shutdown_grace: Duration,
}

impl HealthConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to resolve variable names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HEALTH_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HEALTH_HOST".to_string(), e.to_string()))?;

        let port = lookup("HEALTH_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("HEALTH_PORT".to_string(), e.to_string()))?;

        let grace_secs = lookup("HEALTH_SHUTDOWN_GRACE_SECS")
            .map_or(Ok(crate::SHUTDOWN_GRACE.as_secs()), |v| v.parse::<u64>())
            .map_err(|e| {
                ConfigError::InvalidEnvVar("HEALTH_SHUTDOWN_GRACE_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            host,
            port,
            shutdown_grace: Duration::from_secs(grace_secs),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
