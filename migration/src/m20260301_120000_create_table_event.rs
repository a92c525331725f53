/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Event::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Event::RequestId).string().not_null())
                    .col(ColumnDef::new(Event::Author).string().not_null())
                    .col(ColumnDef::new(Event::Action).string().not_null())
                    .col(ColumnDef::new(Event::FromBranch).string())
                    .col(ColumnDef::new(Event::ToBranch).string().not_null())
                    .col(ColumnDef::new(Event::Timestamp).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Event {
    Table,
    Id,
    RequestId,
    Author,
    Action,
    FromBranch,
    ToBranch,
    Timestamp,
}
