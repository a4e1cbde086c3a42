//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::GoalStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and carries the goal store that
/// every handler receives explicitly through `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Box<dyn GoalStore>,
}

impl AppState {
    /// Create a new application state around `store`.
    pub fn new(store: impl GoalStore + 'static) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: Box::new(store),
            }),
        }
    }

    /// Get a reference to the goal store.
    #[must_use]
    pub fn store(&self) -> &dyn GoalStore {
        self.inner.store.as_ref()
    }
}
