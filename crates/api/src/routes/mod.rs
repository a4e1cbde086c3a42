//! HTTP route handlers for the goal API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health          - Liveness check
//! GET    /health/ready    - Readiness check (pings the store)
//!
//! # Goals
//! GET    /goals           - List goals (?start=&count=)
//! POST   /goal            - Create a goal
//! GET    /goal/{id}       - Fetch a goal
//! PUT    /goal/{id}       - Update a goal
//! DELETE /goal/{id}       - Delete a goal
//! ```

pub mod goals;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the goal routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/goals", get(goals::list_goals))
        .route("/goal", post(goals::create_goal))
        .route(
            "/goal/{id}",
            get(goals::get_goal)
                .put(goals::update_goal)
                .delete(goals::delete_goal),
        )
}

/// Create the health check router.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies store connectivity before returning OK.
/// Returns 503 Service Unavailable if the store is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.store().ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
