//! Core application layer
//!
//! This module provides:
//! - The record service (validation and orchestration)
//! - Configuration management
//! - Structured logging system
//! - Error handling and type system

pub mod config;
pub mod error;
pub mod logging;
pub mod services;

pub use config::Config;
pub use error::{ErrorResponse, RecordError, Result};
pub use logging::Logger;
pub use services::RecordService;
