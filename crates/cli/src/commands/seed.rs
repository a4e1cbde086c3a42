//! Seed the database with sample goals.

use todo_api_core::GoalInput;
use todo_api_server::db::{GoalStore, PgGoalStore};

use super::CliError;

/// Insert `count` sample goals (at least one).
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn run(count: u32) -> Result<u32, CliError> {
    let store = PgGoalStore::new(super::connect().await?);
    let count = count.max(1);

    for i in 1..=count {
        let goal = store.insert(sample_goal(i)).await?;
        tracing::debug!(goal_id = %goal.id, "Seeded goal");
    }

    tracing::info!(count, "Seeded goals");
    Ok(count)
}

fn sample_goal(n: u32) -> GoalInput {
    GoalInput::new(
        format!("Sample goal {n}"),
        format!("Seeded sample goal number {n}"),
    )
}
