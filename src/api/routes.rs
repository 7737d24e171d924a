//! API routes

use crate::api::handlers::{
    create_record, delete_record, health_check, home, list_records, update_record, AppState,
};
use axum::{routing::get, Router};

/// Routes that answer without an API key
pub fn build_public_routes() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
}

/// Record routes; the caller layers authentication on top
pub fn build_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/records", get(list_records).post(create_record))
        .route("/records/:id", axum::routing::put(update_record).delete(delete_record))
        .with_state(state)
}
