//! Business logic services
//!
//! This module implements the Application Layer that sits between the REST
//! API Layer and the database: request validation, id generation, and the
//! mapping of storage outcomes to errors.

use crate::api::models::{CreateRecordRequest, RecordListing, UpdateRecordRequest};
use crate::core::error::{RecordError, Result};
use crate::db::models::{Record, RecordChanges};
use crate::db::repository::{RecordRepository, Repository};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

const MISSING_CREATE_FIELDS: &str = "Missing required fields: name, status";

/// Record service for managing record business logic
pub struct RecordService {
    record_repo: Arc<RecordRepository>,
}

impl RecordService {
    /// Create a new RecordService
    pub fn new(record_repo: Arc<RecordRepository>) -> Self {
        Self { record_repo }
    }

    /// Create a new record and return its generated ID
    pub async fn create_record(&self, request: Option<CreateRecordRequest>) -> Result<String> {
        let request = request
            .ok_or_else(|| RecordError::ValidationError(MISSING_CREATE_FIELDS.to_string()))?;

        let (name, status) = match (request.name, request.status) {
            (Some(name), Some(status)) => (name, status),
            _ => return Err(RecordError::ValidationError(MISSING_CREATE_FIELDS.to_string())),
        };
        validate_value("name", &name)?;
        validate_value("status", &status)?;

        let record = Record {
            id: Uuid::new_v4().to_string(),
            name,
            status,
            created_at: String::new(),
        };

        self.record_repo.create(&record).await?;

        info!(record_id = %record.id, status = %record.status, "Record created");

        Ok(record.id)
    }

    /// List all records, or only those whose status matches exactly
    ///
    /// An empty filter string is treated as no filter.
    pub async fn list_records(&self, status: Option<&str>) -> Result<RecordListing> {
        let records = match status.filter(|s| !s.is_empty()) {
            Some(status) => self.record_repo.find_by_status(status).await?,
            None => self.record_repo.find_all().await?,
        };

        debug!(count = records.len(), filter = ?status, "Records listed");

        Ok(records
            .into_iter()
            .map(|record| (record.id.clone(), record.into()))
            .collect())
    }

    /// Apply a partial update to an existing record
    pub async fn update_record(&self, id: &str, request: Option<UpdateRecordRequest>) -> Result<()> {
        let request = request
            .ok_or_else(|| RecordError::ValidationError("No data provided".to_string()))?;

        if !self.record_repo.exists(id).await? {
            return Err(RecordError::record_not_found());
        }

        let changes = RecordChanges {
            name: request.name,
            status: request.status,
        };
        if changes.is_empty() {
            return Err(RecordError::ValidationError(
                "No valid fields to update".to_string()
            ));
        }
        for (field, value) in changes.fields() {
            validate_value(field.column(), value)?;
        }

        // The row may have been deleted between the check and the update.
        if self.record_repo.update(id, &changes).await? == 0 {
            return Err(RecordError::record_not_found());
        }

        info!(record_id = %id, "Record updated");

        Ok(())
    }

    /// Permanently delete a record
    pub async fn delete_record(&self, id: &str) -> Result<()> {
        if !self.record_repo.delete(id).await? {
            return Err(RecordError::record_not_found());
        }

        info!(record_id = %id, "Record deleted");

        Ok(())
    }
}

fn validate_value(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RecordError::ValidationError(format!(
            "Field '{}' cannot be empty",
            field
        )));
    }
    Ok(())
}
