//! HTTP server startup logic.
//!
//! Resolves the configured listen address, wires up the graceful shutdown
//! handle, and serves the router until the process is told to stop.

use std::net::{SocketAddr, ToSocketAddrs};

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Cannot resolve listen address '{0}'")]
    Resolve(String),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Start the HTTP server.
///
/// This function blocks until the server shuts down. On a termination signal
/// the listener stops accepting, in-flight requests drain, and the function
/// returns `Ok` so the process can exit cleanly.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = resolve_addr(config)?;

    let handle = Handle::new();

    // Setup graceful shutdown
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!(%addr, "Listening for connections");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

/// Resolve `host:port` to a socket address, so hostname values of `HOST`
/// (including the `localhost` default) work alongside IP literals.
fn resolve_addr(config: &AppConfig) -> Result<SocketAddr, ServerError> {
    let listen_addr = config.listen_addr();
    listen_addr
        .to_socket_addrs()
        .map_err(|_| ServerError::Resolve(listen_addr.clone()))?
        .next()
        .ok_or(ServerError::Resolve(listen_addr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_the_default_hostname() {
        let config = AppConfig {
            host: "localhost".to_string(),
            port: 8080,
        };
        let addr = resolve_addr(&config).unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn resolves_ip_literals() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
        };
        let addr = resolve_addr(&config).unwrap();
        assert_eq!(addr, "127.0.0.1:9000".parse().unwrap());
    }
}
