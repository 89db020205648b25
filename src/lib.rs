//! Warren - Anonymous Message Board Backend
//!
//! Clients create discussion threads under named boards, post replies, list
//! recent threads, and moderate content through reporting and password-gated
//! deletion. Replies are embedded in their parent thread document.

pub mod board;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod web;

pub use board::{BoardService, Reply, Thread, ThreadRepository};
pub use config::Config;
pub use error::{Result, WarrenError};
pub use store::{DbPool, Store};
pub use web::{ApiError, WebServer};
