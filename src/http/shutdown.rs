//! Graceful shutdown and signal handling.
//!
//! Handles SIGTERM/SIGINT with connection draining: the listener stops
//! accepting, in-flight requests run to completion, then the serve loop
//! returns and the process exits.

use axum_server::Handle;

/// Setup graceful shutdown on SIGTERM and SIGINT.
///
/// When either signal is received, the server will:
/// 1. Stop accepting new connections
/// 2. Wait for in-flight requests to complete
/// 3. Shut down
pub fn setup_shutdown_handler(handle: Handle) {
    tokio::spawn(async move {
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
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, shutting down gracefully");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, shutting down gracefully");
            }
        }

        // Drain without a deadline; probe requests are short-lived.
        handle.graceful_shutdown(None);
    });
}
