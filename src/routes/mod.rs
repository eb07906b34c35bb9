//! HTTP route handlers for the probe service.
//!
//! The endpoint table is fixed for the life of the process: `GET /health`
//! and `GET /ping`, both exempt from intermediary caching. Everything else
//! resolves to one of two error outcomes, with the method checked before
//! the path: a non-GET verb is rejected with 405 even on paths the table
//! does not know.
//!
//! Request logging is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod fallback;
pub mod health;
pub mod ping;

use axum::{
    middleware,
    routing::{on, MethodFilter},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_PROBE;
use crate::middleware::request_log_layer;

/// Creates the Axum router with the probe endpoints and fallbacks.
pub fn create_router() -> Router {
    // Probes - never cached, always fresh for liveness checks.
    // MethodFilter::GET keeps the method match exact: HEAD takes the 405
    // path like every other non-GET verb instead of axum's implicit GET
    // handling.
    let probe_routes = Router::new()
        .route(
            "/health",
            on(MethodFilter::GET, health::health).fallback(fallback::method_not_allowed),
        )
        .route(
            "/ping",
            on(MethodFilter::GET, ping::ping).fallback(fallback::method_not_allowed),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PROBE),
        ));

    Router::new()
        .merge(probe_routes)
        // Unknown paths - the method is still checked first
        .fallback(fallback::dispatch_miss)
        // Request log middleware - logs receipt before dispatch and completion after
        .layer(middleware::from_fn(request_log_layer))
}
