//! Request DTOs for the Warren API.
//!
//! Field constraints mirror the data model: board names and delete
//! passwords are 3-15 characters, bodies are 1-50. Identifiers arrive as
//! strings and are parsed separately (see `dto::validation`).

use serde::Deserialize;
use validator::Validate;

/// POST /api/threads/:board
#[derive(Debug, Deserialize, Validate)]
pub struct CreateThreadRequest {
    #[validate(length(min = 1, max = 50, message = "text must be between 1 and 50 characters"))]
    pub text: String,
    #[validate(length(
        min = 3,
        max = 15,
        message = "delete_password must be between 3 and 15 characters"
    ))]
    pub delete_password: String,
}

/// PUT /api/threads/:board
#[derive(Debug, Deserialize, Validate)]
pub struct ReportThreadRequest {
    pub thread_id: String,
}

/// DELETE /api/threads/:board
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteThreadRequest {
    pub thread_id: String,
    #[validate(length(
        min = 3,
        max = 15,
        message = "delete_password must be between 3 and 15 characters"
    ))]
    pub delete_password: String,
}

/// POST /api/replies/:board
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReplyRequest {
    pub thread_id: String,
    #[validate(length(min = 1, max = 50, message = "text must be between 1 and 50 characters"))]
    pub text: String,
    #[validate(length(
        min = 3,
        max = 15,
        message = "delete_password must be between 3 and 15 characters"
    ))]
    pub delete_password: String,
}

/// GET /api/replies/:board query string.
#[derive(Debug, Deserialize)]
pub struct ThreadQuery {
    #[serde(default)]
    pub thread_id: Option<String>,
}

/// PUT /api/replies/:board
#[derive(Debug, Deserialize, Validate)]
pub struct ReportReplyRequest {
    pub thread_id: String,
    pub reply_id: String,
}

/// DELETE /api/replies/:board
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteReplyRequest {
    pub thread_id: String,
    pub reply_id: String,
    #[validate(length(
        min = 3,
        max = 15,
        message = "delete_password must be between 3 and 15 characters"
    ))]
    pub delete_password: String,
}
