//! Table bootstrap
//!
//! There is exactly one table and no versioned migrations; the statement is
//! idempotent and runs every time the database is opened.

use crate::core::error::Result;
use rusqlite::Connection;
use tracing::debug;

const RECORDS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS records (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    status TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Create the `records` table if it does not exist yet
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(RECORDS_TABLE)?;
    debug!("records table ready");
    Ok(())
}
