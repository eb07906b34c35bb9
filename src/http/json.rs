//! Pretty-printed JSON response body.
//!
//! Probe payloads are rendered with 2-space indentation so they read well
//! from curl output and probe logs; axum's `Json` would emit them compact.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON responder that pretty-prints the body and sets
/// `Content-Type: application/json`.
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_string_pretty(&self.0) {
            Ok(body) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                body,
            )
                .into_response(),
            Err(err) => {
                // Unreachable for the fixed probe payloads
                tracing::error!(error = %err, "Failed to serialize response body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Pong {
        message: &'static str,
        status: &'static str,
    }

    #[tokio::test]
    async fn sets_content_type_and_indents_with_two_spaces() {
        let response = PrettyJson(Pong {
            message: "pong",
            status: "ok",
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"{\n  \"message\": \"pong\",\n  \"status\": \"ok\"\n}");
    }
}
