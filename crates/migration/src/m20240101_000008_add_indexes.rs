use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Rank-ordered listings
        manager
            .create_index(
                Index::create()
                    .name("idx_services_order")
                    .table(Services::Table)
                    .col(Services::OrderIndex)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_gallery_order")
                    .table(Gallery::Table)
                    .col(Gallery::OrderIndex)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_faq_order")
                    .table(Faq::Table)
                    .col(Faq::OrderIndex)
                    .to_owned(),
            )
            .await?;

        // Recency-ordered listings
        manager
            .create_index(
                Index::create()
                    .name("idx_blog_posts_published_at")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::PublishedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_products_created_at")
                    .table(Products::Table)
                    .col(Products::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_messages_created_at")
                    .table(ContactMessages::Table)
                    .col(ContactMessages::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_services_order").table(Services::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_gallery_order").table(Gallery::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_faq_order").table(Faq::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_blog_posts_published_at").table(BlogPosts::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_products_created_at").table(Products::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_contact_messages_created_at").table(ContactMessages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Services { Table, OrderIndex }

#[derive(DeriveIden)]
enum Gallery { Table, OrderIndex }

#[derive(DeriveIden)]
enum Faq { Table, OrderIndex }

#[derive(DeriveIden)]
enum BlogPosts { Table, PublishedAt }

#[derive(DeriveIden)]
enum Products { Table, CreatedAt }

#[derive(DeriveIden)]
enum ContactMessages { Table, CreatedAt }
