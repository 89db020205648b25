//! Test helpers for Web API tests.
#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use warren::web::handlers::AppState;
use warren::web::{create_health_router, create_router};
use warren::{Store, Thread, ThreadRepository};

/// Create a test server over an in-memory store.
///
/// The state is returned alongside the server so tests can inspect
/// internal fields (moderation flags, stored passwords) that the API
/// never exposes.
pub async fn create_test_server() -> (TestServer, Arc<AppState>) {
    let store = Store::connect_in_memory()
        .await
        .expect("Failed to open in-memory store");
    let state = Arc::new(AppState::new(store));

    let router = create_router(state.clone(), &[]).merge(create_health_router());
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, state)
}

/// Post a thread to a board.
pub async fn post_thread(server: &TestServer, board: &str, text: &str, password: &str) {
    server
        .post(&format!("/api/threads/{board}"))
        .json(&json!({ "text": text, "delete_password": password }))
        .await;
}

/// Post a thread and return its id from the listing.
pub async fn post_thread_get_id(
    server: &TestServer,
    board: &str,
    text: &str,
    password: &str,
) -> String {
    post_thread(server, board, text, password).await;

    let threads: Value = server.get(&format!("/api/threads/{board}")).await.json();
    threads[0]["_id"]
        .as_str()
        .expect("thread listing has no _id")
        .to_string()
}

/// Post a reply to a thread.
pub async fn post_reply(
    server: &TestServer,
    board: &str,
    thread_id: &str,
    text: &str,
    password: &str,
) {
    server
        .post(&format!("/api/replies/{board}"))
        .json(&json!({
            "thread_id": thread_id,
            "text": text,
            "delete_password": password
        }))
        .await;
}

/// Fetch the full thread JSON through the API.
pub async fn get_thread_json(server: &TestServer, board: &str, thread_id: &str) -> Value {
    server
        .get(&format!("/api/replies/{board}?thread_id={thread_id}"))
        .await
        .json()
}

/// Fetch a thread straight from the store, bypassing the API.
pub async fn fetch_thread(state: &Arc<AppState>, thread_id: &str) -> Option<Thread> {
    let repo = ThreadRepository::new(state.store.pool());
    repo.get(Uuid::parse_str(thread_id).expect("malformed test thread id"))
        .await
        .expect("store lookup failed")
}
