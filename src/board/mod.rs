//! Board domain for Warren.
//!
//! Threads (with embedded replies), the repository over the document store,
//! and the service exposing the board operations.

mod repository;
mod service;
mod thread;

pub use repository::ThreadRepository;
pub use service::BoardService;
pub use thread::{
    Reply, Thread, BOARD_MAX_LEN, BOARD_MIN_LEN, DELETED_TEXT, REPLY_PREVIEW_LIMIT,
    THREAD_LIST_LIMIT,
};
