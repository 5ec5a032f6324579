//! Create `blog_posts` table.
//!
//! `published_at` stays NULL for drafts; posts default to unpublished.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(pk_auto(BlogPosts::Id))
                    .col(string(BlogPosts::Title))
                    .col(string(BlogPosts::Slug).unique_key())
                    .col(text_null(BlogPosts::Excerpt))
                    .col(text(BlogPosts::Content))
                    .col(string_null(BlogPosts::FeaturedImage))
                    .col(string_null(BlogPosts::MetaTitle))
                    .col(string_null(BlogPosts::MetaDescription))
                    .col(boolean(BlogPosts::IsPublished).default(false))
                    .col(timestamp_with_time_zone_null(BlogPosts::PublishedAt))
                    .col(timestamp_with_time_zone(BlogPosts::CreatedAt))
                    .col(timestamp_with_time_zone(BlogPosts::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BlogPosts::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BlogPosts { Table, Id, Title, Slug, Excerpt, Content, FeaturedImage, MetaTitle, MetaDescription, IsPublished, PublishedAt, CreatedAt, UpdatedAt }
