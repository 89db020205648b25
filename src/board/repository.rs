//! Thread repository for Warren.
//!
//! CRUD operations over the thread document store. Mutations rewrite the
//! whole thread document (copy-on-write over the aggregate); there is no
//! row-level access to individual replies.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use super::thread::Thread;
use crate::store::DbPool;
use crate::Result;

/// Repository for thread document operations.
pub struct ThreadRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> ThreadRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new thread document.
    pub async fn insert(&self, thread: &Thread) -> Result<()> {
        let doc = serde_json::to_string(thread)?;

        sqlx::query("INSERT INTO threads (id, board, bumped_on, doc) VALUES ($1, $2, $3, $4)")
            .bind(thread.id.to_string())
            .bind(&thread.board)
            .bind(sort_key(&thread.bumped_on))
            .bind(doc)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Get a thread by ID, regardless of board.
    pub async fn get(&self, id: Uuid) -> Result<Option<Thread>> {
        let row = sqlx::query("SELECT doc FROM threads WHERE id = $1")
            .bind(id.to_string())
            .fetch_optional(self.pool)
            .await?;

        row.map(decode_doc).transpose()
    }

    /// Get a thread by ID within a board.
    pub async fn get_in_board(&self, id: Uuid, board: &str) -> Result<Option<Thread>> {
        let row = sqlx::query("SELECT doc FROM threads WHERE id = $1 AND board = $2")
            .bind(id.to_string())
            .bind(board)
            .fetch_optional(self.pool)
            .await?;

        row.map(decode_doc).transpose()
    }

    /// List the most recently bumped threads in a board, newest first.
    pub async fn list_recent(&self, board: &str, limit: i64) -> Result<Vec<Thread>> {
        let rows = sqlx::query(
            "SELECT doc FROM threads WHERE board = $1 ORDER BY bumped_on DESC LIMIT $2",
        )
        .bind(board)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(decode_doc).collect()
    }

    /// Rewrite a thread document after mutation.
    ///
    /// Returns false if the thread no longer exists (e.g. deleted between
    /// the find and the save; that race is accepted, not guarded).
    pub async fn save(&self, thread: &Thread) -> Result<bool> {
        let doc = serde_json::to_string(thread)?;

        let result = sqlx::query("UPDATE threads SET bumped_on = $1, doc = $2 WHERE id = $3")
            .bind(sort_key(&thread.bumped_on))
            .bind(doc)
            .bind(thread.id.to_string())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a thread document and all its embedded replies.
    ///
    /// Returns true if a thread was deleted.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM threads WHERE id = $1")
            .bind(id.to_string())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Fixed-width RFC 3339 rendering so lexicographic order matches time order.
fn sort_key(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn decode_doc(row: SqliteRow) -> Result<Thread> {
    let doc: String = row.try_get("doc")?;
    Ok(serde_json::from_str(&doc)?)
}
