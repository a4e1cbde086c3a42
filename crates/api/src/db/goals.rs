//! `PostgreSQL`-backed goal store.
//!
//! All statements are parameterized; ids and fields are always bound, never
//! interpolated.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use todo_api_core::{Goal, GoalId, GoalInput, Page};

use super::{GoalStore, RepositoryError};

#[derive(sqlx::FromRow)]
struct GoalRow {
    id: GoalId,
    name: String,
    description: String,
}

impl From<GoalRow> for Goal {
    fn from(row: GoalRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}

/// Goal store over a shared connection pool.
#[derive(Debug, Clone)]
pub struct PgGoalStore {
    pool: PgPool,
}

impl PgGoalStore {
    /// Create a new store over `pool`.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Delete every goal and restart id assignment at 1.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if either statement fails.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM goals")
            .execute(&self.pool)
            .await?;
        sqlx::query("ALTER SEQUENCE goals_id_seq RESTART WITH 1")
            .execute(&self.pool)
            .await?;

        debug!("Reset goals table");
        Ok(())
    }
}

#[async_trait]
impl GoalStore for PgGoalStore {
    #[instrument(skip(self), fields(goal_id = %id))]
    async fn get(&self, id: GoalId) -> Result<Goal, RepositoryError> {
        let row = sqlx::query_as::<_, GoalRow>(
            r"
            SELECT id, name, description
            FROM goals
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Goal::from).ok_or(RepositoryError::NotFound)
    }

    #[instrument(skip(self), fields(start = page.start(), count = page.count()))]
    async fn list(&self, page: Page) -> Result<Vec<Goal>, RepositoryError> {
        let rows = sqlx::query_as::<_, GoalRow>(
            r"
            SELECT id, name, description
            FROM goals
            ORDER BY id
            LIMIT $1 OFFSET $2
            ",
        )
        .bind(page.count())
        .bind(page.start())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Goal::from).collect())
    }

    #[instrument(skip(self, input))]
    async fn insert(&self, input: GoalInput) -> Result<Goal, RepositoryError> {
        let row = sqlx::query_as::<_, GoalRow>(
            r"
            INSERT INTO goals (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            ",
        )
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;

        debug!(goal_id = %row.id, "Inserted goal");
        Ok(row.into())
    }

    #[instrument(skip(self, input), fields(goal_id = %id))]
    async fn update(&self, id: GoalId, input: GoalInput) -> Result<Goal, RepositoryError> {
        let row = sqlx::query_as::<_, GoalRow>(
            r"
            UPDATE goals
            SET name = $1, description = $2
            WHERE id = $3
            RETURNING id, name, description
            ",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map_or_else(
            || {
                debug!("No goal to update");
                Goal::from_input(id, input.clone())
            },
            Goal::from,
        ))
    }

    #[instrument(skip(self), fields(goal_id = %id))]
    async fn delete(&self, id: GoalId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(rows = result.rows_affected(), "Deleted goal");
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
