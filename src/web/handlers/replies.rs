//! Reply handlers for the Warren API.

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Json,
};
use std::sync::Arc;

use crate::board::BoardService;
use crate::web::dto::{
    parse_id, validate_board, CreateReplyRequest, DeleteReplyRequest, ReportReplyRequest,
    ThreadQuery, ThreadView, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::WarrenError;

/// POST /api/replies/:board - Append a reply to a thread.
pub async fn create_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedJson(req): ValidatedJson<CreateReplyRequest>,
) -> Result<Redirect, ApiError> {
    validate_board(&board)?;
    let thread_id = parse_id(&req.thread_id, "thread_id")?;

    let service = BoardService::new(state.store.pool());
    service
        .add_reply(&board, thread_id, &req.text, &req.delete_password)
        .await?;

    Ok(Redirect::to(&format!("/b/{board}/{thread_id}")))
}

/// GET /api/replies/:board?thread_id= - Get a full thread with all replies.
pub async fn show_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    Query(query): Query<ThreadQuery>,
) -> Result<Json<ThreadView>, ApiError> {
    validate_board(&board)?;
    let raw_id = query
        .thread_id
        .as_deref()
        .ok_or_else(|| ApiError::text("thread_id is required"))?;
    let thread_id = parse_id(raw_id, "thread_id")?;

    // Lookup is by id alone; the board segment is validated but not part
    // of the query.
    let service = BoardService::new(state.store.pool());
    let thread = service.thread(thread_id).await?;

    Ok(Json(ThreadView::full(&thread)))
}

/// PUT /api/replies/:board - Report a reply.
pub async fn report_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedJson(req): ValidatedJson<ReportReplyRequest>,
) -> Result<&'static str, ApiError> {
    validate_board(&board)?;
    let thread_id = parse_id(&req.thread_id, "thread_id")?;
    let reply_id = parse_id(&req.reply_id, "reply_id")?;

    let service = BoardService::new(state.store.pool());
    service
        .report_reply(&board, thread_id, reply_id)
        .await
        .map_err(reply_target_error)?;

    Ok("success")
}

/// DELETE /api/replies/:board - Tombstone a reply, password-gated.
pub async fn delete_reply(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedJson(req): ValidatedJson<DeleteReplyRequest>,
) -> Result<&'static str, ApiError> {
    validate_board(&board)?;
    let thread_id = parse_id(&req.thread_id, "thread_id")?;
    let reply_id = parse_id(&req.reply_id, "reply_id")?;

    let service = BoardService::new(state.store.pool());
    service
        .delete_reply(&board, thread_id, reply_id, &req.delete_password)
        .await
        .map_err(reply_target_error)?;

    Ok("success")
}

/// On reply-targeting operations, a missing parent thread gets a message
/// distinct from a missing reply.
fn reply_target_error(err: WarrenError) -> ApiError {
    match err {
        WarrenError::ThreadNotFound => ApiError::text("target thread not found"),
        other => other.into(),
    }
}
