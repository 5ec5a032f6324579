//! Create `pages` table for static site content.
//!
//! The slug is the externally stable lookup key, unique per table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pages::Table)
                    .if_not_exists()
                    .col(pk_auto(Pages::Id))
                    .col(string(Pages::Slug).unique_key())
                    .col(string(Pages::Title))
                    .col(string_null(Pages::MetaTitle))
                    .col(string_null(Pages::MetaDescription))
                    .col(text(Pages::Content))
                    .col(boolean(Pages::IsPublished).default(true))
                    .col(timestamp_with_time_zone(Pages::CreatedAt))
                    .col(timestamp_with_time_zone(Pages::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Pages::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Pages { Table, Id, Slug, Title, MetaTitle, MetaDescription, Content, IsPublished, CreatedAt, UpdatedAt }
