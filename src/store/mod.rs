//! Document store for Warren.
//!
//! SQLite-backed store holding one JSON document per thread. The connection
//! string comes from configuration (`WARREN_DATABASE_URL` overrides it).

mod schema;

pub use schema::MIGRATIONS;

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::{debug, info};

use crate::{Result, WarrenError};

/// Connection pool type used throughout the crate.
pub type DbPool = sqlx::SqlitePool;

/// Document store wrapper managing the connection pool and migrations.
#[derive(Clone)]
pub struct Store {
    pool: DbPool,
}

impl Store {
    /// Connect to the store at the given connection string.
    ///
    /// The database file is created if it doesn't exist. Migrations are
    /// applied automatically.
    pub async fn connect(url: &str) -> Result<Self> {
        info!("Connecting to store at {url}");

        ensure_parent_dir(url)?;

        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| WarrenError::Config(format!("invalid database url {url:?}: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.migrate().await?;

        Ok(store)
    }

    /// Open an in-memory store for testing.
    pub async fn connect_in_memory() -> Result<Self> {
        debug!("Opening in-memory store");

        // A single connection keeps every query on the same in-memory database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.migrate().await?;

        Ok(store)
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Apply schema migrations.
    async fn migrate(&self) -> Result<()> {
        for stmt in MIGRATIONS {
            sqlx::query(stmt).execute(&self.pool).await?;
        }
        Ok(())
    }
}

/// Create the parent directory of a file-backed database path if missing.
fn ensure_parent_dir(url: &str) -> Result<()> {
    let path = url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or(path);

    if path.is_empty() || path == ":memory:" {
        return Ok(());
    }

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
