//! CLI subcommands.

pub mod migrate;
pub mod reset;
pub mod seed;

use sqlx::PgPool;
use thiserror::Error;
use todo_api_server::config::{self, ConfigError};
use todo_api_server::db::{self, RepositoryError};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Goal store operation failed.
    #[error("Goal store error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Connect to the goals database named by the environment.
async fn connect() -> Result<PgPool, CliError> {
    let database_url = config::database_url_from_env()?;

    tracing::info!("Connecting to database...");
    Ok(db::create_pool(&database_url).await?)
}
