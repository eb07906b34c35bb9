//! Ping endpoint.
//!
//! Readiness counterpart to `/health`: a fixed payload with no timestamp,
//! cheap enough to poll at high frequency.

use serde::Serialize;

use crate::http::PrettyJson;

/// Body of a `GET /ping` response.
#[derive(Serialize)]
pub struct PingResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// Ping handler.
pub async fn ping() -> PrettyJson<PingResponse> {
    PrettyJson(PingResponse {
        message: "pong",
        status: "ok",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pong_payload_is_fixed() {
        let payload = ping().await.0;
        assert_eq!(payload.message, "pong");
        assert_eq!(payload.status, "ok");
    }
}
