//! Repository pattern implementation for data access layer
//!
//! Each operation checks a connection out of the pool, runs a single
//! statement in autocommit mode and hands the connection back.

use crate::core::error::Result;
use crate::db::manager::DatabaseManager;
use crate::db::models::{Record, RecordChanges};
use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;

/// Generic repository trait for CRUD operations
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// Find an entity by its ID
    async fn find_by_id(&self, id: &str) -> Result<Option<T>>;

    /// Find all entities
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Create a new entity
    async fn create(&self, entity: &T) -> Result<()>;

    /// Delete an entity by its ID, returning whether a row was removed
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// Repository for Record entities
pub struct RecordRepository {
    db: Arc<DatabaseManager>,
}

impl RecordRepository {
    /// Create a new RecordRepository
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Record> {
        Ok(Record {
            id: row.get(0)?,
            name: row.get(1)?,
            status: row.get(2)?,
            created_at: row.get(3)?,
        })
    }

    /// Find records whose status equals `status` exactly
    pub async fn find_by_status(&self, status: &str) -> Result<Vec<Record>> {
        let status = status.to_string();
        self.db.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, status, created_at FROM records WHERE status = ?"
            )?;

            let records = stmt
                .query_map([&status], Self::map_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(records)
        }).await
    }

    /// Check whether a record with this ID exists
    pub async fn exists(&self, id: &str) -> Result<bool> {
        let id = id.to_string();
        self.db.execute(move |conn| {
            let found = conn
                .query_row("SELECT 1 FROM records WHERE id = ?", [&id], |_| Ok(()))
                .optional()?;
            Ok(found.is_some())
        }).await
    }

    /// Apply a partial update, returning the number of rows changed
    ///
    /// Column names come only from [`crate::db::models::RecordField`]; values
    /// are always bound as parameters.
    pub async fn update(&self, id: &str, changes: &RecordChanges) -> Result<usize> {
        let fields = changes.fields();
        if fields.is_empty() {
            return Ok(0);
        }

        let assignments = fields
            .iter()
            .map(|(field, _)| format!("{} = ?", field.column()))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE records SET {} WHERE id = ?", assignments);

        let mut values: Vec<String> = fields.iter().map(|(_, value)| value.to_string()).collect();
        values.push(id.to_string());

        self.db.execute(move |conn| {
            let affected = conn.execute(&sql, rusqlite::params_from_iter(values.iter()))?;
            Ok(affected)
        }).await
    }
}

#[async_trait]
impl Repository<Record> for RecordRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Record>> {
        let id = id.to_string();
        self.db.execute(move |conn| {
            let record = conn
                .query_row(
                    "SELECT id, name, status, created_at FROM records WHERE id = ?",
                    [&id],
                    Self::map_row,
                )
                .optional()?;
            Ok(record)
        }).await
    }

    async fn find_all(&self) -> Result<Vec<Record>> {
        self.db.execute(|conn| {
            let mut stmt = conn.prepare("SELECT id, name, status, created_at FROM records")?;

            let records = stmt
                .query_map([], Self::map_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(records)
        }).await
    }

    /// `created_at` on the entity is ignored; the store assigns it.
    async fn create(&self, entity: &Record) -> Result<()> {
        let record = entity.clone();
        self.db.execute(move |conn| {
            conn.execute(
                "INSERT INTO records (id, name, status) VALUES (?, ?, ?)",
                params![record.id, record.name, record.status],
            )?;
            Ok(())
        }).await
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let id = id.to_string();
        self.db.execute(move |conn| {
            let affected = conn.execute("DELETE FROM records WHERE id = ?", [&id])?;
            Ok(affected > 0)
        }).await
    }
}
