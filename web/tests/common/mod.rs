/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use entity::event::{self, EventAction};
use hookfeed_core::types::*;
use sea_orm::{DatabaseBackend, MockDatabase, Transaction};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        report_errors: false,
        sentry_dsn: String::new(),
    }
}

pub fn create_mock_state(db: MockDatabase) -> Arc<ServerState> {
    let cli = create_mock_cli();
    Arc::new(ServerState {
        db: db.into_connection(),
        cli,
    })
}

pub fn mock_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

/// Statements the handlers sent to the mock database. Every router built from
/// the state must be dropped before calling this.
pub fn transaction_log(state: Arc<ServerState>) -> Vec<Transaction> {
    Arc::try_unwrap(state)
        .expect("state is still shared")
        .db
        .into_transaction_log()
}

pub fn event_model(
    author: &str,
    action: EventAction,
    from_branch: Option<&str>,
    to_branch: &str,
    timestamp: &str,
) -> event::Model {
    event::Model {
        id: Uuid::new_v4(),
        request_id: "abc123".to_string(),
        author: author.to_string(),
        action,
        from_branch: from_branch.map(str::to_string),
        to_branch: to_branch.to_string(),
        timestamp: timestamp.to_string(),
    }
}

pub fn push_payload() -> Value {
    json!({
        "ref": "refs/heads/main",
        "pusher": { "name": "alice", "email": "alice@example.com" },
        "head_commit": {
            "id": "abc123",
            "message": "Fix typo",
            "timestamp": "2024-05-01T10:00:00Z"
        }
    })
}

pub fn pull_request_payload(action: &str, merged: bool) -> Value {
    json!({
        "action": action,
        "pull_request": {
            "id": 1874239,
            "user": { "login": if merged { "bob" } else { "carol" } },
            "head": { "ref": if merged { "feature-x" } else { "dev" } },
            "base": { "ref": "main" },
            "merged": merged,
            "created_at": "2024-01-02T00:05:00Z",
            "merged_at": if merged { json!("2024-06-15T23:30:00Z") } else { json!(null) }
        }
    })
}

pub fn webhook_request(event_type: Option<&str>, body: impl Into<Body>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/webhook")
        .header("content-type", "application/json");

    if let Some(event_type) = event_type {
        builder = builder.header("X-GitHub-Event", event_type);
    }

    builder.body(body.into()).unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(state: &Arc<ServerState>, request: Request<Body>) -> Response<Body> {
    web::create_router(Arc::clone(state))
        .oneshot(request)
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
