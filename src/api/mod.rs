//! REST API module
//!
//! This module provides the HTTP server and REST API endpoints including:
//! - API routing and request handling
//! - Shared-secret authentication middleware
//! - Per-request trace IDs
//! - Request/response models

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;

pub use middleware::{trace_id_middleware, TraceId, API_KEY_HEADER, TRACE_ID_HEADER};
pub use server::ApiServer;
