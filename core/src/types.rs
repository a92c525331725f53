/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::port_in_range;
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "Hookfeed", display_name = "Hookfeed", bin_name = "hookfeed-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "HOOKFEED_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "HOOKFEED_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "HOOKFEED_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "HOOKFEED_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "HOOKFEED_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "HOOKFEED_REPORT_ERRORS", default_value = "false")]
    pub report_errors: bool,
    #[arg(
        long,
        env = "HOOKFEED_SENTRY_DSN",
        default_value = "https://5895e5a5d35f4dbebbcc47d5a722c402@reports.wavelens.io/1"
    )]
    pub sentry_dsn: String,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EEvent = event::Entity;
pub type MEvent = event::Model;
pub type AEvent = event::ActiveModel;
pub type CEvent = event::Column;
