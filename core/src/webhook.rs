/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Classification of inbound GitHub webhook payloads.
//!
//! A payload is first decoded into a typed [`WebhookEvent`] for its declared
//! event type, then mapped to a [`NewEvent`]. Anything that does not decode
//! or does not match a rule ends up as a [`ClassifyError`] and is never
//! stored.

use super::consts::*;
use super::feed::parse_timestamp;
use super::input::branch_from_ref;
use super::types::AEvent;
use entity::event::EventAction;
use sea_orm::ActiveValue::Set;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Commit ids are strings, pull request ids are numbers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Text(String),
    Number(u64),
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestId::Text(id) => f.write_str(id),
            RequestId::Number(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushPayload {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub head_commit: HeadCommit,
    pub pusher: Pusher,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadCommit {
    pub id: RequestId,
    pub timestamp: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pusher {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    pub action: String,
    pub pull_request: PullRequest,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub id: RequestId,
    pub user: GitUser,
    pub head: BranchRef,
    pub base: BranchRef,
    #[serde(default)]
    pub merged: Option<bool>,
    #[serde(default)]
    pub merged_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitUser {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BranchRef {
    #[serde(rename = "ref")]
    pub git_ref: String,
}

#[derive(Debug, Clone)]
pub enum WebhookEvent {
    Push(PushPayload),
    PullRequest(PullRequestPayload),
}

#[derive(Debug)]
pub enum ClassifyError {
    MissingEventType,
    UnsupportedEvent(String),
    IgnoredPullRequestAction(String),
    MalformedPayload {
        event: &'static str,
        source: serde_json::Error,
    },
    MissingField(&'static str),
    InvalidTimestamp {
        timestamp: String,
        source: chrono::ParseError,
    },
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::MissingEventType => write!(f, "no event type given"),
            ClassifyError::UnsupportedEvent(event) => {
                write!(f, "unsupported event type `{}`", event)
            }
            ClassifyError::IgnoredPullRequestAction(action) => {
                write!(f, "ignored unmerged pull request action `{}`", action)
            }
            ClassifyError::MalformedPayload { event, source } => {
                write!(f, "malformed {} payload: {}", event, source)
            }
            ClassifyError::MissingField(field) => write!(f, "missing field `{}`", field),
            ClassifyError::InvalidTimestamp { timestamp, source } => {
                write!(f, "invalid timestamp `{}`: {}", timestamp, source)
            }
        }
    }
}

impl std::error::Error for ClassifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClassifyError::MalformedPayload { source, .. } => Some(source),
            ClassifyError::InvalidTimestamp { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A classified event ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub request_id: String,
    pub author: String,
    pub action: EventAction,
    pub from_branch: Option<String>,
    pub to_branch: String,
    pub timestamp: String,
}

impl NewEvent {
    pub fn into_active_model(self) -> AEvent {
        AEvent {
            id: Set(Uuid::new_v4()),
            request_id: Set(self.request_id),
            author: Set(self.author),
            action: Set(self.action),
            from_branch: Set(self.from_branch),
            to_branch: Set(self.to_branch),
            timestamp: Set(self.timestamp),
        }
    }
}

impl WebhookEvent {
    pub fn decode(event_type: Option<&str>, payload: Value) -> Result<Self, ClassifyError> {
        match event_type {
            None => Err(ClassifyError::MissingEventType),
            Some(PUSH_EVENT) => serde_json::from_value(payload)
                .map(WebhookEvent::Push)
                .map_err(|source| ClassifyError::MalformedPayload {
                    event: PUSH_EVENT,
                    source,
                }),
            Some(PULL_REQUEST_EVENT) => serde_json::from_value(payload)
                .map(WebhookEvent::PullRequest)
                .map_err(|source| ClassifyError::MalformedPayload {
                    event: PULL_REQUEST_EVENT,
                    source,
                }),
            Some(other) => Err(ClassifyError::UnsupportedEvent(other.to_string())),
        }
    }

    /// Maps the payload to a record. The timestamp is stored as received but
    /// must be one the feed can render.
    pub fn into_event(self) -> Result<NewEvent, ClassifyError> {
        let event = self.into_unchecked_event()?;

        parse_timestamp(&event.timestamp).map_err(|source| ClassifyError::InvalidTimestamp {
            timestamp: event.timestamp.clone(),
            source,
        })?;

        Ok(event)
    }

    fn into_unchecked_event(self) -> Result<NewEvent, ClassifyError> {
        match self {
            WebhookEvent::Push(push) => Ok(NewEvent {
                request_id: push.head_commit.id.to_string(),
                author: push.pusher.name,
                action: EventAction::Push,
                from_branch: None,
                to_branch: branch_from_ref(&push.git_ref).to_string(),
                timestamp: push.head_commit.timestamp,
            }),
            WebhookEvent::PullRequest(payload) => {
                let pr = payload.pull_request;

                // merged wins over the top level action, an absent flag counts as not merged
                let (action, timestamp) = if pr.merged.unwrap_or(false) {
                    let merged_at = pr
                        .merged_at
                        .ok_or(ClassifyError::MissingField("pull_request.merged_at"))?;
                    (EventAction::Merge, merged_at)
                } else if payload.action == PULL_REQUEST_OPENED {
                    let created_at = pr
                        .created_at
                        .ok_or(ClassifyError::MissingField("pull_request.created_at"))?;
                    (EventAction::PullRequest, created_at)
                } else {
                    return Err(ClassifyError::IgnoredPullRequestAction(payload.action));
                };

                Ok(NewEvent {
                    request_id: pr.id.to_string(),
                    author: pr.user.login,
                    action,
                    from_branch: Some(pr.head.git_ref),
                    to_branch: pr.base.git_ref,
                    timestamp,
                })
            }
        }
    }
}

pub fn classify(event_type: Option<&str>, payload: Value) -> Result<NewEvent, ClassifyError> {
    WebhookEvent::decode(event_type, payload)?.into_event()
}
