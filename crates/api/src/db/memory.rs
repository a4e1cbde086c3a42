//! In-memory goal store.
//!
//! Behaves like the `PostgreSQL` store (sequential ids starting at 1, id
//! ordering, not-found on reads of absent ids) without needing a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todo_api_core::{Goal, GoalId, GoalInput, Page};

use super::{GoalStore, RepositoryError};

#[derive(Debug)]
struct Inner {
    next_id: i32,
    goals: BTreeMap<GoalId, Goal>,
}

/// Goal store held in process memory.
#[derive(Debug)]
pub struct InMemoryGoalStore {
    inner: RwLock<Inner>,
}

impl InMemoryGoalStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                goals: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryGoalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GoalStore for InMemoryGoalStore {
    async fn get(&self, id: GoalId) -> Result<Goal, RepositoryError> {
        self.inner
            .read()
            .await
            .goals
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn list(&self, page: Page) -> Result<Vec<Goal>, RepositoryError> {
        let start = usize::try_from(page.start())
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid offset: {e}")))?;
        let count = usize::try_from(page.count())
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid limit: {e}")))?;

        let inner = self.inner.read().await;
        Ok(inner.goals.values().skip(start).take(count).cloned().collect())
    }

    async fn insert(&self, input: GoalInput) -> Result<Goal, RepositoryError> {
        let mut inner = self.inner.write().await;
        let id = GoalId::new(inner.next_id);
        inner.next_id = inner
            .next_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::DataCorruption("goal id overflow".to_string()))?;

        let goal = Goal::from_input(id, input);
        inner.goals.insert(id, goal.clone());
        Ok(goal)
    }

    async fn update(&self, id: GoalId, input: GoalInput) -> Result<Goal, RepositoryError> {
        let mut inner = self.inner.write().await;
        match inner.goals.get_mut(&id) {
            Some(goal) => {
                goal.name = input.name;
                goal.description = input.description;
                Ok(goal.clone())
            }
            None => Ok(Goal::from_input(id, input)),
        }
    }

    async fn delete(&self, id: GoalId) -> Result<(), RepositoryError> {
        self.inner.write().await.goals.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_sequential_and_not_reused() {
        let store = InMemoryGoalStore::new();
        let a = store.insert(GoalInput::new("a", "")).await.unwrap();
        let b = store.insert(GoalInput::new("b", "")).await.unwrap();
        assert_eq!(a.id, GoalId::new(1));
        assert_eq!(b.id, GoalId::new(2));

        store.delete(b.id).await.unwrap();
        let c = store.insert(GoalInput::new("c", "")).await.unwrap();
        assert_eq!(c.id, GoalId::new(3));
    }

    #[tokio::test]
    async fn test_list_respects_page() {
        let store = InMemoryGoalStore::new();
        for i in 0..15 {
            store
                .insert(GoalInput::new(format!("goal {i}"), ""))
                .await
                .unwrap();
        }

        let first = store.list(Page::default()).await.unwrap();
        assert_eq!(first.len(), 10);
        assert_eq!(first.first().unwrap().id, GoalId::new(1));

        let rest = store.list(Page::new(Some(10), Some(10))).await.unwrap();
        assert_eq!(rest.len(), 5);
        assert_eq!(rest.first().unwrap().id, GoalId::new(11));

        let past_end = store.list(Page::new(Some(100), None)).await.unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_absent_id() {
        let store = InMemoryGoalStore::new();
        let update = store
            .update(GoalId::new(5), GoalInput::new("x", "y"))
            .await
            .unwrap();
        assert_eq!(update, Goal::from_input(GoalId::new(5), GoalInput::new("x", "y")));

        // No-op: nothing was created
        assert!(matches!(
            store.get(GoalId::new(5)).await,
            Err(RepositoryError::NotFound)
        ));
        assert!(store.list(Page::default()).await.unwrap().is_empty());

        store.delete(GoalId::new(5)).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let store = InMemoryGoalStore::new();
        let goal = store.insert(GoalInput::new("old", "old desc")).await.unwrap();
        let updated = store
            .update(goal.id, GoalInput::new("new", "new desc"))
            .await
            .unwrap();
        assert_eq!(updated.id, goal.id);
        assert_eq!(updated.name, "new");
        assert_eq!(store.get(goal.id).await.unwrap(), updated);
    }
}
