//! Thread and reply models for Warren.
//!
//! A reply has no existence outside its parent thread: the thread is the
//! aggregate that gets stored, loaded, and rewritten as a whole.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum board name length.
pub const BOARD_MIN_LEN: usize = 3;
/// Maximum board name length.
pub const BOARD_MAX_LEN: usize = 15;

/// Maximum number of threads returned by the recent-threads listing.
pub const THREAD_LIST_LIMIT: i64 = 10;
/// Maximum number of replies included per thread in the listing.
pub const REPLY_PREVIEW_LIMIT: usize = 3;

/// Tombstone text written in place of a deleted reply.
pub const DELETED_TEXT: &str = "[deleted]";

/// Reply entity embedded in a thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// Unique reply ID, assigned at insertion.
    pub id: Uuid,
    /// Reply body.
    pub text: String,
    /// Cleartext password compared literally on delete.
    pub delete_password: String,
    /// Moderation flag.
    pub reported: bool,
    /// Creation timestamp, set once.
    pub created_on: DateTime<Utc>,
}

impl Reply {
    /// Create a new reply with a fresh ID and timestamp.
    pub fn new(text: impl Into<String>, delete_password: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            delete_password: delete_password.into(),
            reported: false,
            created_on: Utc::now(),
        }
    }
}

/// Thread entity representing a discussion thread in a board.
///
/// Replies are owned exclusively by the thread, in posting order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    /// Unique thread ID, assigned at creation.
    pub id: Uuid,
    /// Name of the board this thread belongs to.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Cleartext password compared literally on delete.
    pub delete_password: String,
    /// Moderation flag.
    pub reported: bool,
    /// Creation timestamp, set once.
    pub created_on: DateTime<Utc>,
    /// Last activity timestamp, updated on every mutation. Determines
    /// list ordering.
    pub bumped_on: DateTime<Utc>,
    /// Embedded replies, insertion order = posting order.
    pub replies: Vec<Reply>,
}

impl Thread {
    /// Create a new thread with fresh ID and timestamps and no replies.
    pub fn new(
        board: impl Into<String>,
        text: impl Into<String>,
        delete_password: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board: board.into(),
            text: text.into(),
            delete_password: delete_password.into(),
            reported: false,
            created_on: now,
            bumped_on: now,
            replies: Vec::new(),
        }
    }

    /// Update the activity timestamp.
    pub fn bump(&mut self) {
        self.bumped_on = Utc::now();
    }

    /// Append a reply and bump the thread.
    pub fn push_reply(&mut self, reply: Reply) {
        self.replies.push(reply);
        self.bump();
    }

    /// Find a reply by ID.
    pub fn reply(&self, id: Uuid) -> Option<&Reply> {
        self.replies.iter().find(|r| r.id == id)
    }

    /// Find a reply by ID, mutably.
    pub fn reply_mut(&mut self, id: Uuid) -> Option<&mut Reply> {
        self.replies.iter_mut().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_thread_defaults() {
        let thread = Thread::new("b1", "hello", "pw123");
        assert_eq!(thread.board, "b1");
        assert_eq!(thread.text, "hello");
        assert_eq!(thread.delete_password, "pw123");
        assert!(!thread.reported);
        assert!(thread.replies.is_empty());
        assert_eq!(thread.created_on, thread.bumped_on);
    }

    #[test]
    fn test_new_reply_defaults() {
        let reply = Reply::new("hi", "rp123");
        assert_eq!(reply.text, "hi");
        assert_eq!(reply.delete_password, "rp123");
        assert!(!reply.reported);
    }

    #[test]
    fn test_push_reply_bumps_thread() {
        let mut thread = Thread::new("b1", "hello", "pw123");
        let created_on = thread.created_on;

        let reply = Reply::new("hi", "rp123");
        let reply_created = reply.created_on;
        thread.push_reply(reply);

        assert_eq!(thread.replies.len(), 1);
        assert!(thread.bumped_on >= reply_created);
        assert!(thread.bumped_on > created_on);
    }

    #[test]
    fn test_replies_keep_posting_order() {
        let mut thread = Thread::new("b1", "hello", "pw123");
        thread.push_reply(Reply::new("first", "rp123"));
        thread.push_reply(Reply::new("second", "rp123"));

        assert_eq!(thread.replies[0].text, "first");
        assert_eq!(thread.replies[1].text, "second");
    }

    #[test]
    fn test_reply_lookup_by_id() {
        let mut thread = Thread::new("b1", "hello", "pw123");
        let reply = Reply::new("hi", "rp123");
        let reply_id = reply.id;
        thread.push_reply(reply);

        assert!(thread.reply(reply_id).is_some());
        assert!(thread.reply(Uuid::new_v4()).is_none());

        let found = thread.reply_mut(reply_id).unwrap();
        found.text = DELETED_TEXT.to_string();
        assert_eq!(thread.reply(reply_id).unwrap().text, "[deleted]");
    }

    #[test]
    fn test_thread_document_round_trip() {
        let mut thread = Thread::new("b1", "hello", "pw123");
        thread.push_reply(Reply::new("hi", "rp123"));

        let doc = serde_json::to_string(&thread).unwrap();
        let decoded: Thread = serde_json::from_str(&doc).unwrap();

        assert_eq!(decoded.id, thread.id);
        assert_eq!(decoded.replies.len(), 1);
        assert_eq!(decoded.replies[0].id, thread.replies[0].id);
        assert_eq!(decoded.bumped_on, thread.bumped_on);
    }
}
