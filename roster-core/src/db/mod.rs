//! Database Module
//!
//! SQLite connection pool and the roster schema.

pub mod repository;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use crate::db::repository::{RepoError, RepoResult};

/// Database service — owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open the database (creating the file if missing) in WAL mode and
    /// make sure the roster schema exists.
    pub async fn new(db_path: &str) -> RepoResult<Self> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| RepoError::Database(format!("Invalid database path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to open database: {e}")))?;

        // Wait on a write conflict instead of failing immediately
        sqlx::query("PRAGMA busy_timeout = 5000;")
            .execute(&pool)
            .await?;

        init_schema(&pool).await?;
        tracing::info!("Database ready (SQLite WAL, busy_timeout=5000ms)");

        Ok(Self { pool })
    }
}

/// Create the trainer and trainee tables on a fresh database.
///
/// Per-table UNIQUE(phone_number) is the storage-layer backstop; the
/// cross-table uniqueness checks run inside the insert transaction.
pub async fn init_schema(pool: &SqlitePool) -> RepoResult<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS trainer (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone_number TEXT NOT NULL UNIQUE,
            date_of_birth TEXT NOT NULL,
            date_of_joining TEXT NOT NULL,
            designation TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'trainer',
            previous_work_experience REAL NOT NULL DEFAULT 0,
            salary REAL NOT NULL,
            project_name TEXT NOT NULL,
            batch_name TEXT NOT NULL,
            trainee_count INTEGER NOT NULL DEFAULT 0,
            is_active INTEGER NOT NULL DEFAULT 1
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS trainee (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone_number TEXT NOT NULL UNIQUE,
            date_of_birth TEXT NOT NULL,
            date_of_joining TEXT NOT NULL,
            designation TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'trainee',
            salary REAL NOT NULL,
            batch_name TEXT NOT NULL,
            trainer_id TEXT REFERENCES trainer(id),
            is_active INTEGER NOT NULL DEFAULT 1
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
