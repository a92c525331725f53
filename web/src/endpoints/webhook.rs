/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use crate::requests::StatusResponse;
use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use bytes::Bytes;
use hookfeed_core::consts::EVENT_HEADER;
use hookfeed_core::database::insert_event;
use hookfeed_core::types::ServerState;
use hookfeed_core::webhook::classify;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Receives a GitHub delivery. Events that are not a push, an opened pull
/// request or a merge are acknowledged the same way but not stored.
#[instrument(
    name = "webhook",
    skip(state, headers, body),
    fields(
        event_type = headers.get(EVENT_HEADER).and_then(|v| v.to_str().ok()).unwrap_or("none"),
        content_length = body.len(),
    )
)]
pub async fn post_webhook(
    state: State<Arc<ServerState>>,
    headers: HeaderMap,
    body: Bytes,
) -> WebResult<Json<StatusResponse>> {
    let event_type = headers
        .get(EVENT_HEADER)
        .and_then(|value| value.to_str().ok());

    let payload = parse_payload(&body)?;

    match classify(event_type, payload) {
        Ok(event) => {
            let event = insert_event(&state.db, event).await?;
            info!(
                event_id = %event.id,
                action = %event.action,
                author = %event.author,
                "Stored webhook event"
            );
        }
        Err(err) => debug!(reason = %err, "Webhook not stored"),
    }

    Ok(Json(StatusResponse::processed()))
}

/// Only a non-empty JSON object counts as a payload.
fn parse_payload(body: &[u8]) -> WebResult<Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) if !map.is_empty() => Ok(Value::Object(map)),
        Ok(_) => Err(WebError::InvalidPayload),
        Err(err) => {
            debug!(error = %err, "Rejecting webhook body");
            Err(WebError::InvalidPayload)
        }
    }
}
