//! Schema definitions for the thread document store.

/// Migration statements applied in order on every open.
///
/// Each thread is stored as a single JSON document in the `doc` column.
/// `board` and `bumped_on` are lifted into real columns so the recent-threads
/// query can filter and sort without touching the documents. Replies live
/// inside the document and are never addressed as rows of their own.
pub const MIGRATIONS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS threads (
        id TEXT PRIMARY KEY,
        board TEXT NOT NULL,
        bumped_on TEXT NOT NULL,
        doc TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_threads_board_bumped_on
        ON threads (board, bumped_on DESC)",
];
