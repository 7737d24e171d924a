//! Database manager implementation
//!
//! This module provides database connection management with:
//! - SQLite connection pool using r2d2
//! - Async wrapper for blocking database operations
//! - Table bootstrap on open

use crate::core::config::DatabaseConfig;
use crate::core::error::{RecordError, Result};
use crate::db::schema;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::task;

/// Database manager with connection pool
#[derive(Clone)]
pub struct DatabaseManager {
    pool: Pool<SqliteConnectionManager>,
    db_path: PathBuf,
}

impl DatabaseManager {
    /// Create a new DatabaseManager with the specified database path and pool size
    pub fn new(db_path: &Path, pool_size: u32, busy_timeout: Duration) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    RecordError::StorageError(format!(
                        "cannot create database directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let manager = SqliteConnectionManager::file(db_path)
            .with_init(move |conn| {
                conn.busy_timeout(busy_timeout)?;
                // WAL lets readers proceed while a writer holds the lock
                conn.execute_batch("PRAGMA journal_mode = WAL;")?;
                Ok(())
            });

        let pool = Pool::builder()
            .max_size(pool_size)
            .connection_timeout(Duration::from_secs(30))
            .build(manager)?;

        let manager = Self {
            pool,
            db_path: db_path.to_path_buf(),
        };

        manager.init_schema()?;

        Ok(manager)
    }

    /// Create a DatabaseManager from the `[database]` configuration section
    pub fn from_config(config: &DatabaseConfig) -> Result<Self> {
        Self::new(
            &config.path,
            config.connection_pool_size,
            Duration::from_millis(config.busy_timeout),
        )
    }

    /// Create a new DatabaseManager with an in-memory database for testing
    pub fn new_in_memory() -> Result<Self> {
        // Every in-memory connection is its own database, so the pool holds one.
        let manager = SqliteConnectionManager::memory();

        let pool = Pool::builder()
            .max_size(1)
            .connection_timeout(Duration::from_secs(30))
            .build(manager)?;

        let manager = Self {
            pool,
            db_path: PathBuf::from(":memory:"),
        };

        manager.init_schema()?;

        Ok(manager)
    }

    /// Get a connection from the pool
    pub fn get_connection(&self) -> Result<PooledConnection<SqliteConnectionManager>> {
        Ok(self.pool.get()?)
    }

    /// Execute a database operation asynchronously
    ///
    /// The closure runs on tokio's blocking pool with a checked-out
    /// connection, which goes back to the pool on every exit path.
    pub async fn execute<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();

        task::spawn_blocking(move || {
            let conn = pool.get()?;
            f(&conn)
        })
        .await
        .map_err(|e| RecordError::StorageError(format!("database task failed: {}", e)))?
    }

    /// Ensure the `records` table exists
    pub fn init_schema(&self) -> Result<()> {
        let conn = self.get_connection()?;
        schema::ensure_schema(&conn)
    }

    /// Get the database file path
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Get the configured pool size
    pub fn pool_size(&self) -> u32 {
        self.pool.max_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_db() -> (DatabaseManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let manager = DatabaseManager::new(&db_path, 4, Duration::from_secs(5)).unwrap();
        (manager, temp_dir)
    }

    #[test]
    fn test_database_manager_creation() {
        let (manager, temp_dir) = create_test_db();
        assert_eq!(manager.pool_size(), 4);
        assert_eq!(manager.db_path(), temp_dir.path().join("test.db"));
        assert!(manager.db_path().exists());
    }

    #[test]
    fn test_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("records.db");
        DatabaseManager::new(&db_path, 1, Duration::from_secs(5)).unwrap();
        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_records_table_exists_after_open() {
        let (manager, _temp_dir) = create_test_db();

        let count: i64 = manager
            .execute(|conn| {
                Ok(conn.query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'records'",
                    [],
                    |row| row.get(0),
                )?)
            })
            .await
            .unwrap();

        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_reopen_keeps_rows() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let first = DatabaseManager::new(&db_path, 2, Duration::from_secs(5)).unwrap();
        first
            .execute(|conn| {
                conn.execute(
                    "INSERT INTO records (id, name, status) VALUES ('r1', 'a', 'open')",
                    [],
                )?;
                Ok(())
            })
            .await
            .unwrap();
        drop(first);

        let second = DatabaseManager::new(&db_path, 2, Duration::from_secs(5)).unwrap();
        let count: i64 = second
            .execute(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?))
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_execute_surfaces_storage_error() {
        let manager = DatabaseManager::new_in_memory().unwrap();

        let result = manager
            .execute(|conn| {
                conn.execute("INSERT INTO missing_table (x) VALUES (1)", [])?;
                Ok(())
            })
            .await;

        match result {
            Err(RecordError::StorageError(message)) => assert!(message.contains("missing_table")),
            other => panic!("expected storage error, got {:?}", other.map(|_| ())),
        }
    }
}
