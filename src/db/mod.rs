//! Database module
//!
//! This module provides database management functionality including:
//! - Database connection pool management
//! - Repository pattern implementation for records
//! - Table bootstrap
//! - Data models

pub mod manager;
pub mod models;
pub mod repository;
pub mod schema;

pub use manager::DatabaseManager;
pub use models::{Record, RecordChanges, RecordField};
pub use repository::{RecordRepository, Repository};
