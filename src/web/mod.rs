//! Web API module for Warren.
//!
//! Exposes the two board-scoped resources (`/api/threads/:board`,
//! `/api/replies/:board`) over HTTP/JSON.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::{create_health_router, create_router};
pub use server::WebServer;
