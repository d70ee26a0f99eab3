//! Migration: create the `places` table.

use sea_orm_migration::prelude::*;

use crate::config::IDX_PLACE_NAME_UNIQUE;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Places::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Places::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Places::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Places::Rating).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLACE_NAME_UNIQUE)
                    .table(Places::Table)
                    .col(Places::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Places::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Places {
    Table,
    Id,
    Name,
    Rating,
}
