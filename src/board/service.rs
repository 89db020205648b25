//! Board service for Warren.
//!
//! The eight operations of the message board: create/list/report/delete for
//! threads, create/get/report/delete for replies. Each operation is a single
//! independent transition: at most one find followed by one write, with no
//! cross-request state. Find-then-save sequences are not atomic; a thread
//! deleted concurrently between the two calls simply makes the save a no-op.

use uuid::Uuid;

use super::repository::ThreadRepository;
use super::thread::{Reply, Thread, DELETED_TEXT, THREAD_LIST_LIMIT};
use crate::store::DbPool;
use crate::{Result, WarrenError};

/// Service exposing the board operations over a thread repository.
pub struct BoardService<'a> {
    repo: ThreadRepository<'a>,
}

impl<'a> BoardService<'a> {
    /// Create a new service instance over the given pool.
    pub fn new(pool: &'a DbPool) -> Self {
        Self {
            repo: ThreadRepository::new(pool),
        }
    }

    /// Create a new thread in a board.
    pub async fn create_thread(
        &self,
        board: &str,
        text: &str,
        delete_password: &str,
    ) -> Result<Thread> {
        let thread = Thread::new(board, text, delete_password);
        self.repo.insert(&thread).await?;
        Ok(thread)
    }

    /// List the most recently active threads in a board.
    pub async fn recent_threads(&self, board: &str) -> Result<Vec<Thread>> {
        self.repo.list_recent(board, THREAD_LIST_LIMIT).await
    }

    /// Mark a thread as reported.
    ///
    /// Succeeds whether or not the thread exists; there is no existence
    /// check on this path.
    pub async fn report_thread(&self, board: &str, thread_id: Uuid) -> Result<()> {
        if let Some(mut thread) = self.repo.get_in_board(thread_id, board).await? {
            thread.reported = true;
            thread.bump();
            self.repo.save(&thread).await?;
        }
        Ok(())
    }

    /// Delete a thread and all its replies, gated by its delete password.
    ///
    /// A missing thread and a wrong password are deliberately
    /// indistinguishable to the caller.
    pub async fn delete_thread(
        &self,
        board: &str,
        thread_id: Uuid,
        delete_password: &str,
    ) -> Result<()> {
        let thread = self
            .repo
            .get_in_board(thread_id, board)
            .await?
            .filter(|t| t.delete_password == delete_password)
            .ok_or(WarrenError::IncorrectPassword)?;

        self.repo.delete(thread.id).await?;
        Ok(())
    }

    /// Append a reply to a thread, bumping the parent.
    pub async fn add_reply(
        &self,
        board: &str,
        thread_id: Uuid,
        text: &str,
        delete_password: &str,
    ) -> Result<Reply> {
        let mut thread = self
            .repo
            .get_in_board(thread_id, board)
            .await?
            .ok_or(WarrenError::ThreadNotFound)?;

        let reply = Reply::new(text, delete_password);
        thread.push_reply(reply.clone());
        self.repo.save(&thread).await?;

        Ok(reply)
    }

    /// Get a full thread with all its replies.
    pub async fn thread(&self, thread_id: Uuid) -> Result<Thread> {
        self.repo
            .get(thread_id)
            .await?
            .ok_or(WarrenError::ThreadNotFound)
    }

    /// Mark a reply as reported.
    pub async fn report_reply(&self, board: &str, thread_id: Uuid, reply_id: Uuid) -> Result<()> {
        let mut thread = self
            .repo
            .get_in_board(thread_id, board)
            .await?
            .ok_or(WarrenError::ThreadNotFound)?;

        let reply = thread
            .reply_mut(reply_id)
            .ok_or(WarrenError::ReplyNotFound)?;
        reply.reported = true;

        thread.bump();
        self.repo.save(&thread).await?;
        Ok(())
    }

    /// Tombstone a reply, gated by its delete password.
    ///
    /// The reply record and its ID survive; only the text is replaced.
    /// A missing reply and a wrong password report the same failure.
    pub async fn delete_reply(
        &self,
        board: &str,
        thread_id: Uuid,
        reply_id: Uuid,
        delete_password: &str,
    ) -> Result<()> {
        let mut thread = self
            .repo
            .get_in_board(thread_id, board)
            .await?
            .ok_or(WarrenError::ThreadNotFound)?;

        match thread.reply_mut(reply_id) {
            Some(reply) if reply.delete_password == delete_password => {
                reply.text = DELETED_TEXT.to_string();
            }
            _ => return Err(WarrenError::IncorrectPassword),
        }

        thread.bump();
        self.repo.save(&thread).await?;
        Ok(())
    }
}
