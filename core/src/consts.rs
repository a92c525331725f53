/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

/// Number of events rendered by the activity feed.
pub const FEED_LIMIT: u64 = 10;

pub const EVENT_HEADER: &str = "X-GitHub-Event";
pub const PUSH_EVENT: &str = "push";
pub const PULL_REQUEST_EVENT: &str = "pull_request";
pub const PULL_REQUEST_OPENED: &str = "opened";

pub const FEED_TIME_FORMAT: &str = "%d %B %Y - %I:%M %p UTC";
