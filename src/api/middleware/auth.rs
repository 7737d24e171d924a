use crate::core::error::RecordError;
use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// HTTP header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// Authentication middleware that validates the shared-secret header
///
/// This middleware:
/// - Reads the `x-api-key` header
/// - Compares it against the configured secret in constant time
/// - Returns 401 `{"error":"Unauthorized"}` when the header is missing or wrong
///
/// It is layered onto the record routes only; `/` and `/health` stay public.
pub async fn auth_middleware(
    request: Request,
    next: Next,
) -> Result<Response, RecordError> {
    let api_key = request
        .extensions()
        .get::<ApiKey>()
        .ok_or(RecordError::Unauthorized)?;

    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .map(|value| value.as_bytes());

    if !api_key.matches(provided) {
        return Err(RecordError::Unauthorized);
    }

    Ok(next.run(request).await)
}

/// Extension type holding the deployment's shared secret
#[derive(Clone)]
pub struct ApiKey {
    key: Arc<str>,
}

impl ApiKey {
    /// Create a new ApiKey
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self { key: key.into() }
    }

    /// Constant-time check of a presented header value
    pub fn matches(&self, provided: Option<&[u8]>) -> bool {
        match provided {
            Some(provided) => self.key.as_bytes().ct_eq(provided).into(),
            None => false,
        }
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::StatusCode,
        middleware,
        response::IntoResponse,
        routing::get,
        Router,
    };
    use tower::util::ServiceExt; // For oneshot method

    async fn protected_handler() -> impl IntoResponse {
        (StatusCode::OK, "Protected resource")
    }

    fn app(api_key: ApiKey) -> Router {
        Router::new()
            .route("/protected", get(protected_handler))
            .layer(middleware::from_fn(move |mut req: Request<Body>, next: Next| {
                let api_key = api_key.clone();
                async move {
                    req.extensions_mut().insert(api_key);
                    auth_middleware(req, next).await
                }
            }))
    }

    #[test]
    fn test_api_key_matches() {
        let key = ApiKey::new("test-secret-key");
        assert!(key.matches(Some(b"test-secret-key")));
        assert!(!key.matches(Some(b"test-secret-kez")));
        assert!(!key.matches(Some(b"test-secret")));
        assert!(!key.matches(Some(b"")));
        assert!(!key.matches(None));
    }

    #[tokio::test]
    async fn test_auth_middleware_with_valid_key() {
        let request = Request::builder()
            .uri("/protected")
            .header(API_KEY_HEADER, "test-secret-key")
            .body(Body::empty())
            .unwrap();

        let response = app(ApiKey::new("test-secret-key")).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_auth_middleware_with_invalid_key() {
        let request = Request::builder()
            .uri("/protected")
            .header(API_KEY_HEADER, "wrong-key")
            .body(Body::empty())
            .unwrap();

        let response = app(ApiKey::new("test-secret-key")).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Unauthorized" }));
    }

    #[tokio::test]
    async fn test_auth_middleware_with_missing_key() {
        let request = Request::builder()
            .uri("/protected")
            .body(Body::empty())
            .unwrap();

        let response = app(ApiKey::new("test-secret-key")).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_auth_middleware_ignores_bearer_header() {
        let request = Request::builder()
            .uri("/protected")
            .header("Authorization", "Bearer test-secret-key")
            .body(Body::empty())
            .unwrap();

        let response = app(ApiKey::new("test-secret-key")).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
