/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for event persistence against a mock database

use entity::event::{self, EventAction};
use hookfeed_core::consts::FEED_LIMIT;
use hookfeed_core::database::{insert_event, recent_events};
use hookfeed_core::webhook::NewEvent;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Transaction, Value};
use std::collections::BTreeMap;
use uuid::Uuid;

fn push_event() -> NewEvent {
    NewEvent {
        request_id: "abc123".to_string(),
        author: "alice".to_string(),
        action: EventAction::Push,
        from_branch: None,
        to_branch: "main".to_string(),
        timestamp: "2024-05-01T10:00:00Z".to_string(),
    }
}

fn stored_model(event: &NewEvent) -> event::Model {
    event::Model {
        id: Uuid::new_v4(),
        request_id: event.request_id.clone(),
        author: event.author.clone(),
        action: event.action,
        from_branch: event.from_branch.clone(),
        to_branch: event.to_branch.clone(),
        timestamp: event.timestamp.clone(),
    }
}

#[tokio::test]
async fn test_insert_event() {
    let event = push_event();
    let model = stored_model(&event);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .into_connection();

    let inserted = insert_event(&db, event).await.unwrap();
    assert_eq!(inserted, model);

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1);

    let statement = format!("{:?}", log[0]);
    assert!(statement.contains("INSERT INTO"));
    assert!(statement.contains("abc123"));
    assert!(statement.contains("PUSH"));
}

#[tokio::test]
async fn test_insert_same_event_twice() {
    let event = push_event();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored_model(&event)], vec![stored_model(&event)]])
        .into_connection();

    let first = insert_event(&db, event.clone()).await.unwrap();
    let second = insert_event(&db, event).await.unwrap();
    assert_ne!(first.id, second.id);

    assert_eq!(db.into_transaction_log().len(), 2);
}

#[tokio::test]
async fn test_insert_event_storage_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection refused".to_string())])
        .into_connection();

    assert!(insert_event(&db, push_event()).await.is_err());
}

#[tokio::test]
async fn test_recent_events_query() {
    let newer = NewEvent {
        request_id: "1874239".to_string(),
        author: "bob".to_string(),
        action: EventAction::Merge,
        from_branch: Some("feature-x".to_string()),
        to_branch: "main".to_string(),
        timestamp: "2024-06-15T23:30:00Z".to_string(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![stored_model(&newer), stored_model(&push_event())]])
        .into_connection();

    let events = recent_events(&db, FEED_LIMIT).await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].author, "bob");
    assert_eq!(events[0].action, "MERGE");
    assert_eq!(events[0].from_branch.as_deref(), Some("feature-x"));
    assert_eq!(events[1].action, "PUSH");
    assert_eq!(events[1].from_branch, None);

    assert_eq!(
        db.into_transaction_log(),
        vec![Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT "event"."id", "event"."request_id", "event"."author", "event"."action", "event"."from_branch", "event"."to_branch", "event"."timestamp" FROM "event" ORDER BY "event"."timestamp" DESC LIMIT $1"#,
            [10u64.into()]
        )]
    );
}

#[tokio::test]
async fn test_recent_events_passes_limit() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<event::Model>::new()])
        .into_connection();

    recent_events(&db, 3).await.unwrap();

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1);

    let statements = log[0].statements();
    assert_eq!(statements.len(), 1);
    assert!(
        statements[0]
            .sql
            .ends_with(r#"ORDER BY "event"."timestamp" DESC LIMIT $1"#)
    );
    assert_eq!(
        statements[0].values.as_ref().map(|values| values.0.clone()),
        Some(vec![Value::BigUnsigned(Some(3))])
    );
}

#[tokio::test]
async fn test_recent_events_keeps_unknown_action() {
    let row = BTreeMap::from([
        ("id", Value::from(Uuid::new_v4())),
        ("request_id", Value::from("7")),
        ("author", Value::from("mallory")),
        ("action", Value::from("REBASE")),
        ("from_branch", Value::String(None)),
        ("to_branch", Value::from("main")),
        ("timestamp", Value::from("2024-05-01T10:00:00Z")),
    ]);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();

    let events = recent_events(&db, FEED_LIMIT).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action, "REBASE");
}

#[tokio::test]
async fn test_recent_events_empty() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<event::Model>::new()])
        .into_connection();

    assert!(recent_events(&db, FEED_LIMIT).await.unwrap().is_empty());
}
