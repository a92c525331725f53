/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::response::Html;

const INDEX_PAGE: &str = include_str!("../../templates/index.html");

pub async fn get_index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}
