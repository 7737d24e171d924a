//! Records API Library
//!
//! A small record-keeping HTTP service: create, list, filter, update and
//! delete named records with a status, stored in a single SQLite table and
//! guarded by a shared API key.

pub mod api;
pub mod core;
pub mod db;

// Re-export commonly used types
pub use api::ApiServer;
pub use crate::core::{Config, RecordError, RecordService};
pub use db::DatabaseManager;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
