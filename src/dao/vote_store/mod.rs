//! SQLite-backed store enforcing the voting model's consistency rules.
//!
//! Uniqueness and referential integrity live in the schema itself, so
//! concurrent clients cannot bypass them: usernames and game names carry
//! UNIQUE constraints, votes carry a UNIQUE (user, game) pair, and both vote
//! foreign keys cascade on delete.

mod games;
mod users;
mod votes;

use std::{path::Path, str::FromStr, time::Duration};

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::dao::storage::{StorageError, StorageResult};

/// Statements run at startup to prepare the schema.
const SCHEMA_SQL: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT UNIQUE NOT NULL
    );
    CREATE TABLE IF NOT EXISTS games (
        id INTEGER PRIMARY KEY,
        name TEXT UNIQUE NOT NULL,
        disk_usage TEXT NOT NULL DEFAULT '',
        info TEXT NOT NULL DEFAULT '',
        players TEXT NOT NULL DEFAULT ''
    );
    CREATE TABLE IF NOT EXISTS votes (
        user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        game_id INTEGER NOT NULL REFERENCES games(id) ON DELETE CASCADE,
        value INTEGER NOT NULL,
        UNIQUE (user_id, game_id)
    );
";

/// Handle on the SQLite database backing all store operations.
#[derive(Clone)]
pub struct SqliteVoteStore {
    pool: SqlitePool,
}

impl SqliteVoteStore {
    /// Open (creating if needed) the database file and prepare the schema.
    pub async fn connect(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| {
                StorageError::unavailable(
                    format!("creating database directory `{}`", parent.display()),
                    source,
                )
            })?;
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}?mode=rwc", path.display()))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            // Every connection must enforce referential integrity; SQLite
            // applies this pragma per connection, not per database.
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        Self::with_options(options).await
    }

    /// Open a private in-memory database. Used by the integration tests.
    pub async fn connect_in_memory() -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        Self::with_options(options).await
    }

    async fn with_options(options: SqliteConnectOptions) -> StorageResult<Self> {
        // A single connection sidesteps SQLite writer contention and keeps
        // in-memory databases coherent across pooled checkouts.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.prepare_schema().await?;
        Ok(store)
    }

    async fn prepare_schema(&self) -> StorageResult<()> {
        for statement in SCHEMA_SQL.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Cheap connectivity probe used by the health route.
    pub async fn health_check(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
