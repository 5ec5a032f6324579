//! Create `services` table.
//!
//! Price is optional; display order is the explicit `order_index` rank.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(pk_auto(Services::Id))
                    .col(string(Services::Title))
                    .col(text(Services::Description))
                    .col(string_null(Services::Icon))
                    .col(decimal_len_null(Services::Price, 10, 2))
                    .col(boolean(Services::IsActive).default(true))
                    .col(integer(Services::OrderIndex).default(0))
                    .col(timestamp_with_time_zone(Services::CreatedAt))
                    .col(timestamp_with_time_zone(Services::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Services { Table, Id, Title, Description, Icon, Price, IsActive, OrderIndex, CreatedAt, UpdatedAt }
