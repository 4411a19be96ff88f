//! Database schema migrations for runcoach.
//!
//! Migrations are versioned and applied automatically when opening the database.
//! The `schema_version` table tracks the current migration version.
//!
//! The `runners`, `records` and `logs` tables keep the column names of the
//! historical bot schema so existing databases stay readable.

use rusqlite::{Connection, Result as SqliteResult};

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 2;

/// Apply all pending migrations to bring the database to the current schema version.
///
/// # Errors
/// Returns an error if migration fails.
pub fn migrate(conn: &Connection) -> SqliteResult<()> {
    create_schema_version_table(conn)?;

    let current_version = get_schema_version(conn);

    if current_version < 1 {
        migrate_v1(conn)?;
    }
    if current_version < 2 {
        migrate_v2(conn)?;
    }

    Ok(())
}

fn create_schema_version_table(conn: &Connection) -> SqliteResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        );",
    )
}

/// Returns 0 if no version is set (initial database).
pub fn get_schema_version(conn: &Connection) -> i32 {
    conn.query_row("SELECT version FROM schema_version", [], |row| {
        row.get::<_, i32>(0)
    })
    .unwrap_or_else(|e| {
        if !matches!(e, rusqlite::Error::QueryReturnedNoRows) {
            tracing::warn!("failed to read schema_version: {}", e);
        }
        0
    })
}

fn set_schema_version(conn: &Connection, version: i32) -> SqliteResult<()> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Migration v1: runners, records and logs tables.
fn migrate_v1(conn: &Connection) -> SqliteResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(
        "CREATE TABLE IF NOT EXISTS runners (
            user_id BIGINT PRIMARY KEY,
            vma FLOAT,
            fcm INT,
            fcr INT,
            username TEXT
        );

        CREATE TABLE IF NOT EXISTS records (
            user_id BIGINT,
            distance VARCHAR(20),
            time_seconds INT,
            date DATE,
            PRIMARY KEY (user_id, distance)
        );

        CREATE TABLE IF NOT EXISTS logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id BIGINT,
            date DATE,
            distance_km FLOAT,
            duration_seconds INT,
            comment TEXT
        );",
    )?;

    set_schema_version(&tx, 1)?;
    tx.commit()?;
    tracing::info!("applied schema migration v1");
    Ok(())
}

/// Migration v2: indexes for leaderboard and recent-log queries.
fn migrate_v2(conn: &Connection) -> SqliteResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_records_distance_time ON records(distance, time_seconds);
         CREATE INDEX IF NOT EXISTS idx_logs_user_id ON logs(user_id, id);",
    )?;

    set_schema_version(&tx, 2)?;
    tx.commit()?;
    tracing::info!("applied schema migration v2");
    Ok(())
}
