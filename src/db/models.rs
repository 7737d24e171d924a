//! Database models
//!
//! Data structures representing the `records` table

use serde::{Deserialize, Serialize};

/// Record row in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub status: String,
    /// Assigned by SQLite (`CURRENT_TIMESTAMP`) at insert time
    pub created_at: String,
}

/// Columns a client is allowed to change after creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Name,
    Status,
}

impl RecordField {
    pub fn column(self) -> &'static str {
        match self {
            RecordField::Name => "name",
            RecordField::Status => "status",
        }
    }
}

/// A partial update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordChanges {
    pub name: Option<String>,
    pub status: Option<String>,
}

impl RecordChanges {
    /// Present fields paired with their new values, in column order
    pub fn fields(&self) -> Vec<(RecordField, &str)> {
        let mut fields = Vec::with_capacity(2);
        if let Some(name) = &self.name {
            fields.push((RecordField::Name, name.as_str()));
        }
        if let Some(status) = &self.status {
            fields.push((RecordField::Status, status.as_str()));
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none()
    }
}
