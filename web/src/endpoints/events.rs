/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::Json;
use axum::extract::State;
use hookfeed_core::consts::FEED_LIMIT;
use hookfeed_core::database::recent_events;
use hookfeed_core::feed::{FeedItem, render_feed};
use hookfeed_core::types::ServerState;
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip(state))]
pub async fn get_events(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<FeedItem>>> {
    let events = recent_events(&state.db, FEED_LIMIT).await?;
    let feed = render_feed(&events);

    debug!(stored = events.len(), rendered = feed.len(), "Rendered event feed");

    Ok(Json(feed))
}
