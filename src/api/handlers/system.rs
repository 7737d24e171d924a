use axum::response::Json;
use serde_json::{json, Value};

/// Banner served at `/`
pub const HOME_BANNER: &str = "API is running! Check /apidocs for docs";

/// Handler for GET / - Plain-text banner, no authentication
pub async fn home() -> &'static str {
    HOME_BANNER
}

/// Handler for GET /health - Liveness probe, no authentication
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().timestamp(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let value = health_check().await.0;

        assert_eq!(value["status"], "ok");
        assert!(value["version"].is_string());
        assert!(value["timestamp"].is_number());
    }
}
