/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use serde_json::{Value, json};

pub fn push_payload(git_ref: &str, commit_id: &str, timestamp: &str, pusher: &str) -> Value {
    json!({
        "ref": git_ref,
        "before": "0000000000000000000000000000000000000000",
        "after": commit_id,
        "repository": { "id": 35129377, "full_name": "octo-org/hello-world" },
        "pusher": { "name": pusher, "email": format!("{}@example.com", pusher) },
        "head_commit": {
            "id": commit_id,
            "message": "Update README.md",
            "timestamp": timestamp,
            "author": { "name": pusher, "username": pusher }
        }
    })
}

pub fn pull_request_payload(
    action: &str,
    merged: Option<bool>,
    login: &str,
    head: &str,
    base: &str,
) -> Value {
    let mut pull_request = json!({
        "id": 1874239,
        "number": 42,
        "state": if action == "closed" { "closed" } else { "open" },
        "user": { "login": login, "id": 583231 },
        "head": { "ref": head, "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e" },
        "base": { "ref": base, "sha": "9049f1265b7d61be4a8904a9a27120d2064dab3b" },
        "created_at": "2024-01-02T00:05:00Z",
        "merged_at": null
    });

    if let Some(merged) = merged {
        pull_request["merged"] = json!(merged);
        if merged {
            pull_request["merged_at"] = json!("2024-06-15T23:30:00Z");
        }
    }

    json!({
        "action": action,
        "number": 42,
        "pull_request": pull_request,
        "repository": { "id": 35129377, "full_name": "octo-org/hello-world" }
    })
}
