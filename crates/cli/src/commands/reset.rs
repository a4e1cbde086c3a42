//! Clear the goals table.

use todo_api_server::db::PgGoalStore;

use super::CliError;

/// Delete every goal and restart ids at 1.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a statement fails.
pub async fn run() -> Result<(), CliError> {
    let store = PgGoalStore::new(super::connect().await?);
    store.reset().await?;

    tracing::info!("Goals table reset");
    Ok(())
}
