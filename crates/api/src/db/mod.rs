//! Goal storage.
//!
//! # Database
//!
//! ## Tables
//!
//! - `goals` - The goal resource (`id SERIAL`, `name`, `description`)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p todo-api-cli -- migrate
//! ```
//!
//! # Stores
//!
//! Handlers talk to a [`GoalStore`] trait object, so the same routes run on
//! top of [`PgGoalStore`] in production and [`InMemoryGoalStore`] in tests.

pub mod goals;
pub mod memory;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use todo_api_core::{Goal, GoalId, GoalInput, Page};

pub use goals::PgGoalStore;
pub use memory::InMemoryGoalStore;

/// Embedded schema migrations for the `goals` table.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Errors from goal storage.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested goal was not found.
    #[error("not found")]
    NotFound,
}

/// Storage operations for goals.
///
/// Every operation is a single statement; there is no cross-call
/// transaction.
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// Fetch a goal by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no goal has this id.
    async fn get(&self, id: GoalId) -> Result<Goal, RepositoryError>;

    /// List goals ordered by id within `page`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    async fn list(&self, page: Page) -> Result<Vec<Goal>, RepositoryError>;

    /// Insert a goal; the store assigns the id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    async fn insert(&self, input: GoalInput) -> Result<Goal, RepositoryError>;

    /// Replace the name and description of a goal.
    ///
    /// Updating an absent id is a no-op that still succeeds: nothing is
    /// written and the input is returned under `id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    async fn update(&self, id: GoalId, input: GoalInput) -> Result<Goal, RepositoryError>;

    /// Delete a goal by id. Deleting an absent id succeeds.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    async fn delete(&self, id: GoalId) -> Result<(), RepositoryError>;

    /// Check that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing database cannot be queried.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
