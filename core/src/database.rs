/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, DbErr, EntityTrait,
    QueryOrder, QuerySelect,
};
use std::time::Duration;
use tracing::log::LevelFilter;

use super::feed::StoredEvent;
use super::types::*;
use super::webhook::NewEvent;

pub fn database_url(cli: &Cli) -> Result<String> {
    if let Some(file) = &cli.database_url_file {
        let url = std::fs::read_to_string(file).context("Failed to read database url from file")?;
        Ok(url.trim().to_string())
    } else if let Some(url) = &cli.database_url {
        Ok(url.clone())
    } else {
        anyhow::bail!("No database url provided")
    }
}

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(database_url(cli)?);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(600));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    Ok(db)
}

/// Appends a classified event. Every call inserts a new row.
pub async fn insert_event(db: &DatabaseConnection, event: NewEvent) -> Result<MEvent, DbErr> {
    event.into_active_model().insert(db).await
}

/// Most recent events first, ordered by their source timestamp.
pub async fn recent_events(db: &DatabaseConnection, limit: u64) -> Result<Vec<StoredEvent>, DbErr> {
    EEvent::find()
        .order_by_desc(CEvent::Timestamp)
        .limit(limit)
        .into_model::<StoredEvent>()
        .all(db)
        .await
}
