//! Response DTOs for the Warren API.
//!
//! Views are the only thread/reply shapes that ever reach a client.
//! `delete_password` and `reported` exist on the domain models but have no
//! field here, so they cannot leak through serialization.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::board::{Reply, Thread, REPLY_PREVIEW_LIMIT};

/// Client-visible reply.
#[derive(Debug, Serialize)]
pub struct ReplyView {
    /// Reply ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Reply body.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
}

impl From<&Reply> for ReplyView {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id,
            text: reply.text.clone(),
            created_on: reply.created_on,
        }
    }
}

/// Client-visible thread.
#[derive(Debug, Serialize)]
pub struct ThreadView {
    /// Thread ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Board name.
    pub board: String,
    /// Thread body.
    pub text: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Last activity timestamp.
    pub bumped_on: DateTime<Utc>,
    /// Visible replies.
    pub replies: Vec<ReplyView>,
}

impl ThreadView {
    /// Listing view: only the most recent replies, newest first.
    pub fn summary(thread: &Thread) -> Self {
        let mut replies: Vec<&Reply> = thread.replies.iter().collect();
        replies.sort_by(|a, b| b.created_on.cmp(&a.created_on));
        replies.truncate(REPLY_PREVIEW_LIMIT);

        Self::build(thread, replies.into_iter().map(ReplyView::from).collect())
    }

    /// Full view: every reply, in posting order.
    pub fn full(thread: &Thread) -> Self {
        Self::build(thread, thread.replies.iter().map(ReplyView::from).collect())
    }

    fn build(thread: &Thread, replies: Vec<ReplyView>) -> Self {
        Self {
            id: thread.id,
            board: thread.board.clone(),
            text: thread.text.clone(),
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            replies,
        }
    }
}
