//! Standalone health-check server for the Todo API.
//!
//! Serves a single endpoint, `GET /todo-api-health`, for load balancers and
//! orchestrators. On shutdown the server stops accepting connections and
//! gives in-flight requests a bounded grace period ([`SHUTDOWN_GRACE`] by
//! default) to finish before closing them.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{Router, http::StatusCode, routing::get};
use axum_server::Handle;
use thiserror::Error;

/// Path of the health endpoint.
pub const HEALTH_PATH: &str = "/todo-api-health";

/// Default upper bound on graceful shutdown.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Errors from running the health server.
#[derive(Debug, Error)]
pub enum HealthError {
    /// Binding or serving failed.
    #[error("health server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the health router.
pub fn router() -> Router {
    Router::new().route(HEALTH_PATH, get(health))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Serve the health router on `addr` until `shutdown` resolves.
///
/// Once `shutdown` completes, new connections are refused and open ones get
/// `grace` before they are dropped.
///
/// # Errors
///
/// Returns `HealthError::Io` if the address cannot be bound or the server
/// fails while running.
pub async fn serve<F>(
    addr: SocketAddr,
    handle: Handle<SocketAddr>,
    shutdown: F,
    grace: Duration,
) -> Result<(), HealthError>
where
    F: Future<Output = ()> + Send + 'static,
{
    serve_router(router(), addr, handle, shutdown, grace).await
}

/// Serve `app` on `addr` with the same bounded shutdown as [`serve`].
///
/// # Errors
///
/// Returns `HealthError::Io` if the address cannot be bound or the server
/// fails while running.
pub async fn serve_router<F>(
    app: Router,
    addr: SocketAddr,
    handle: Handle<SocketAddr>,
    shutdown: F,
    grace: Duration,
) -> Result<(), HealthError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let shutdown_handle = handle.clone();
    tokio::spawn(async move {
        shutdown.await;
        tracing::info!(
            grace_ms = u64::try_from(grace.as_millis()).unwrap_or(u64::MAX),
            "Shutting down health server"
        );
        shutdown_handle.graceful_shutdown(Some(grace));
    });

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
