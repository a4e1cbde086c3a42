//! Todo API health-check server.
//!
//! Serves `GET /todo-api-health` on port 8080 and shuts down gracefully on
//! Ctrl+C or SIGTERM, waiting at most `HEALTH_SHUTDOWN_GRACE_SECS` (default
//! 10) for open requests.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum_server::Handle;

use todo_api_health::config::HealthConfig;

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "todo_api_health=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = HealthConfig::from_env().expect("Failed to load configuration");
    let addr = config.socket_addr();
    tracing::info!("health server listening on http://{}", addr);

    if let Err(e) = todo_api_health::serve(
        addr,
        Handle::new(),
        shutdown_signal(),
        config.shutdown_grace,
    )
    .await
    {
        tracing::error!("Health server failed: {e}");
        std::process::exit(1);
    }

    tracing::info!("Health server stopped");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
