//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe used by Kubernetes, ECS, systemd, and load
//! balancers to verify the service is alive.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::http::PrettyJson;

/// Body of a `GET /health` response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub message: &'static str,
}

/// Health check handler.
///
/// Always reports healthy with the time the request was served: this is a
/// liveness probe, it only checks that the process can respond to HTTP.
pub async fn health() -> PrettyJson<HealthResponse> {
    PrettyJson(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        message: "Server is healthy and running",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn reports_healthy_with_current_timestamp() {
        let before = Utc::now();
        let payload = health().await.0;
        let after = Utc::now();

        assert_eq!(payload.status, "ok");
        assert_eq!(payload.message, "Server is healthy and running");

        let parsed = DateTime::parse_from_rfc3339(&payload.timestamp)
            .expect("timestamp is valid ISO-8601")
            .with_timezone(&Utc);
        assert!(parsed >= before - chrono::Duration::seconds(1));
        assert!(parsed <= after + chrono::Duration::seconds(1));
    }
}
