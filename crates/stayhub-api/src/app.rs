//! HTTP server bootstrap.

use tokio::net::TcpListener;
use tracing::info;

use stayhub_core::error::AppError;

use crate::router::build_router;
use crate::state::AppState;

/// Bind the configured address and serve until shutdown is signalled.
pub async fn serve(state: AppState) -> Result<(), AppError> {
    let addr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    );

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(%addr, "StayHub API listening");

    let router = build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("Server shut down gracefully");
    Ok(())
}

/// Resolve when SIGINT (or SIGTERM on Unix) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
