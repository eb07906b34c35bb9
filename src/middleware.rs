//! Request logging middleware.
//!
//! Generates a UUID v4 for each incoming request and creates a tracing span
//! that wraps the request lifecycle. Each request is logged once on receipt,
//! before it reaches the dispatcher, and once on completion with its status
//! code and duration. All logs emitted in between carry the request_id field
//! for correlation.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Middleware that logs every request and wraps it in a correlation span.
///
/// This should be the outermost middleware layer so the span covers the
/// entire dispatch, including the fallback handlers.
pub async fn request_log_layer(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let path = uri.path();

    // Create the request span with key fields for correlation
    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    let start = Instant::now();

    // Process the request within the span
    async move {
        tracing::info!("Request received");

        let response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}
