//! Create `gallery` table. Rank-ordered; rows are never edited, so there is
//! no `updated_at`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gallery::Table)
                    .if_not_exists()
                    .col(pk_auto(Gallery::Id))
                    .col(string(Gallery::Title))
                    .col(text_null(Gallery::Description))
                    .col(string(Gallery::ImageUrl))
                    .col(string_null(Gallery::Category))
                    .col(integer(Gallery::OrderIndex).default(0))
                    .col(boolean(Gallery::IsActive).default(true))
                    .col(timestamp_with_time_zone(Gallery::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Gallery::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Gallery { Table, Id, Title, Description, ImageUrl, Category, OrderIndex, IsActive, CreatedAt }
