pub mod records;
pub mod system;

pub use records::*;
pub use system::*;

use crate::core::services::RecordService;
use std::sync::Arc;

/// Shared application state for handlers
#[derive(Clone)]
pub struct AppState {
    pub record_service: Arc<RecordService>,
}
