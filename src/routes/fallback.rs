//! The two error outcomes of the endpoint table.
//!
//! The method is checked before the path: a non-GET request is rejected with
//! 405 whether or not the path is known, and only a GET for an unknown path
//! reports 404. Both outcomes are structured JSON, never bare status codes,
//! so probes and operators always get a machine-readable reason.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::config::{ALLOWED_METHODS, AVAILABLE_ENDPOINTS};
use crate::http::PrettyJson;

/// Body of a 404 response.
#[derive(Serialize)]
pub struct NotFoundResponse {
    pub error: &'static str,
    pub status: &'static str,
    pub available_endpoints: [&'static str; 2],
}

/// Body of a 405 response.
#[derive(Serialize)]
pub struct MethodNotAllowedResponse {
    pub error: &'static str,
    pub status: &'static str,
    pub allowed_methods: [&'static str; 1],
}

/// Router-level fallback for paths outside the endpoint table.
pub async fn dispatch_miss(method: Method) -> Response {
    if method == Method::GET {
        not_found().await.into_response()
    } else {
        method_not_allowed().await.into_response()
    }
}

/// 405 for any verb other than GET. Also installed as the per-route method
/// fallback on the probe endpoints.
pub async fn method_not_allowed() -> (StatusCode, PrettyJson<MethodNotAllowedResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        PrettyJson(MethodNotAllowedResponse {
            error: "Method not allowed",
            status: "error",
            allowed_methods: ALLOWED_METHODS,
        }),
    )
}

/// 404 for a GET the endpoint table does not know.
async fn not_found() -> (StatusCode, PrettyJson<NotFoundResponse>) {
    (
        StatusCode::NOT_FOUND,
        PrettyJson(NotFoundResponse {
            error: "Endpoint not found",
            status: "error",
            available_endpoints: AVAILABLE_ENDPOINTS,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn get_on_unknown_path_is_not_found() {
        let response = dispatch_miss(Method::GET).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Endpoint not found");
        assert_eq!(body["status"], "error");
        assert_eq!(body["available_endpoints"], json!(["/health", "/ping"]));
    }

    #[tokio::test]
    async fn non_get_wins_over_unknown_path() {
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::HEAD] {
            let response = dispatch_miss(method.clone()).await;
            assert_eq!(
                response.status(),
                StatusCode::METHOD_NOT_ALLOWED,
                "{method} should be rejected before the path is considered"
            );
        }
    }

    #[tokio::test]
    async fn method_not_allowed_names_the_allowed_verbs() {
        let response = method_not_allowed().await.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Method not allowed");
        assert_eq!(body["status"], "error");
        assert_eq!(body["allowed_methods"], json!(["GET"]));
    }
}
