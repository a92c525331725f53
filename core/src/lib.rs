/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod feed;
pub mod input;
pub mod types;
pub mod webhook;

use anyhow::Result;
use database::connect_db;
use std::sync::Arc;
use tracing::info;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    info!(ip = %cli.ip, port = cli.port, "Starting Hookfeed Server");

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState { db, cli }))
}
