//! Thread handlers for the Warren API.

use axum::{
    extract::{Path, State},
    response::Redirect,
    Json,
};
use std::sync::Arc;

use crate::board::BoardService;
use crate::web::dto::{
    parse_id, validate_board, CreateThreadRequest, DeleteThreadRequest, ReportThreadRequest,
    ThreadView, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/threads/:board - Create a new thread.
pub async fn create_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedJson(req): ValidatedJson<CreateThreadRequest>,
) -> Result<Redirect, ApiError> {
    validate_board(&board)?;

    let service = BoardService::new(state.store.pool());
    service
        .create_thread(&board, &req.text, &req.delete_password)
        .await?;

    Ok(Redirect::to(&format!("/b/{board}")))
}

/// GET /api/threads/:board - List recently active threads.
pub async fn list_threads(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
) -> Result<Json<Vec<ThreadView>>, ApiError> {
    validate_board(&board)?;

    let service = BoardService::new(state.store.pool());
    let threads = service.recent_threads(&board).await?;

    Ok(Json(threads.iter().map(ThreadView::summary).collect()))
}

/// PUT /api/threads/:board - Report a thread.
pub async fn report_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedJson(req): ValidatedJson<ReportThreadRequest>,
) -> Result<&'static str, ApiError> {
    validate_board(&board)?;
    let thread_id = parse_id(&req.thread_id, "thread_id")?;

    let service = BoardService::new(state.store.pool());
    service.report_thread(&board, thread_id).await?;

    Ok("success")
}

/// DELETE /api/threads/:board - Delete a thread, password-gated.
pub async fn delete_thread(
    State(state): State<Arc<AppState>>,
    Path(board): Path<String>,
    ValidatedJson(req): ValidatedJson<DeleteThreadRequest>,
) -> Result<&'static str, ApiError> {
    validate_board(&board)?;
    let thread_id = parse_id(&req.thread_id, "thread_id")?;

    let service = BoardService::new(state.store.pool());
    service
        .delete_thread(&board, thread_id, &req.delete_password)
        .await?;

    Ok("success")
}
