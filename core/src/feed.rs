/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::FEED_TIME_FORMAT;
use chrono::{DateTime, NaiveDateTime};
use entity::event::EventAction;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Stored event as read back for rendering. `action` stays a plain string so
/// a row with an unexpected value can be skipped instead of failing the query.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct StoredEvent {
    pub author: String,
    pub action: String,
    pub from_branch: Option<String>,
    pub to_branch: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub message: String,
}

#[derive(Debug)]
pub enum RenderError {
    UnknownAction(String),
    InvalidTimestamp {
        timestamp: String,
        source: chrono::ParseError,
    },
    MissingFromBranch(EventAction),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnknownAction(action) => write!(f, "unknown event action `{}`", action),
            RenderError::InvalidTimestamp { timestamp, source } => {
                write!(f, "invalid timestamp `{}`: {}", timestamp, source)
            }
            RenderError::MissingFromBranch(action) => {
                write!(f, "{} event without source branch", action)
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::InvalidTimestamp { source, .. } => Some(source),
            _ => None,
        }
    }
}

const OFFSET_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601 timestamp into the wall clock time it was recorded
/// with. A trailing `Z` is read as `+00:00`, seconds and the offset colon
/// are optional, the date and time may be separated by a space.
pub fn parse_timestamp(timestamp: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let normalized = match timestamp
        .strip_suffix('Z')
        .or_else(|| timestamp.strip_suffix('z'))
    {
        Some(base) => format!("{}+00:00", base),
        None => timestamp.to_string(),
    };

    let first_err = match DateTime::parse_from_str(&normalized, OFFSET_FORMATS[0]) {
        Ok(datetime) => return Ok(datetime.naive_local()),
        Err(err) => err,
    };

    for format in &OFFSET_FORMATS[1..] {
        if let Ok(datetime) = DateTime::parse_from_str(&normalized, format) {
            return Ok(datetime.naive_local());
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Ok(datetime);
        }
    }

    Err(first_err)
}

/// Formats an ISO-8601 timestamp as `01 May 2024 - 10:00 AM UTC`.
///
/// The time is shown in the offset it was recorded with, the `UTC` suffix is
/// a fixed label. Values without an offset are shown as given.
pub fn format_timestamp(timestamp: &str) -> Result<String, chrono::ParseError> {
    parse_timestamp(timestamp).map(|datetime| datetime.format(FEED_TIME_FORMAT).to_string())
}

pub fn render_message(event: &StoredEvent) -> Result<String, RenderError> {
    let action = EventAction::from_str(&event.action)
        .map_err(|_| RenderError::UnknownAction(event.action.clone()))?;

    let timestamp =
        format_timestamp(&event.timestamp).map_err(|source| RenderError::InvalidTimestamp {
            timestamp: event.timestamp.clone(),
            source,
        })?;

    let message = match action {
        EventAction::Push => format!(
            "{} pushed to {} on {}",
            event.author, event.to_branch, timestamp
        ),
        EventAction::PullRequest => format!(
            "{} submitted a pull request from {} to {} on {}",
            event.author,
            event
                .from_branch
                .as_deref()
                .ok_or(RenderError::MissingFromBranch(action))?,
            event.to_branch,
            timestamp
        ),
        EventAction::Merge => format!(
            "{} merged branch {} to {} on {}",
            event.author,
            event
                .from_branch
                .as_deref()
                .ok_or(RenderError::MissingFromBranch(action))?,
            event.to_branch,
            timestamp
        ),
    };

    Ok(message)
}

/// Renders stored events in the given order. Rows that cannot be rendered
/// are logged and left out.
pub fn render_feed(events: &[StoredEvent]) -> Vec<FeedItem> {
    events
        .iter()
        .filter_map(|event| match render_message(event) {
            Ok(message) => Some(FeedItem { message }),
            Err(err) => {
                warn!(error = %err, author = %event.author, "Skipping stored event");
                None
            }
        })
        .collect()
}
